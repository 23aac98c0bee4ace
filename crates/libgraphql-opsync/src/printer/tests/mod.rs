mod operation_printer_tests;
