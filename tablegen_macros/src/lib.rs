extern crate proc_macro;

mod tablesgen;

use proc_macro::TokenStream;
use tablesgen::define_table_impl;

#[proc_macro]
pub fn define_table(input: TokenStream) -> TokenStream {
    define_table_impl(input)
}
