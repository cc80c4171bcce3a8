mod keyword_table_tests;
mod token_tests;
