mod operation_parser_tests;
