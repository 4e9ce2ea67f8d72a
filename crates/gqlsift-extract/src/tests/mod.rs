mod brace_balancer_tests;
mod lexeme_scanner_tests;
