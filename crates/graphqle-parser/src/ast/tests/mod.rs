mod annotation_tests;
mod any_node_tests;
mod ast_test_utils;
mod document_tests;
mod schema_definition_tests;
mod structural_error_tests;
mod value_tests;
