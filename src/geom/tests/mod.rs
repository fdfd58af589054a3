mod test_trace_basic;
