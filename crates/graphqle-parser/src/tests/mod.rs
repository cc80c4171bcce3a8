mod idl_parser_tests;
mod parse_error_tests;
mod source_position_tests;
mod syntax_token_stream_tests;
mod utils;
