mod type_graph_builder_tests;
