//! # Handler Table Macro
//!
//! Reads an annotated header at compile time and generates the dispatch table as a Rust
//! module, using the same scanner and parser as the header generators.
//!
//! ## Macro Input Format
//!
//! ```rust
//! mod <module_name>;
//! profile = "<builtins|sighandlers>";
//! path = "<file_path>";
//! handler = <fn pointer type>;   // optional
//! ```
//!
//! - `mod <module_name>`: Name of the generated module.
//! - `profile`: Which table convention to apply to the file.
//! - `path`: Annotated header, relative to the invoking crate's manifest directory.
//! - `handler`: When present, `HANDLERS` is generated, wiring `super::<identifier>` for
//!   every entry.
//!
//! ## Generated API
//! - `COUNT: usize`
//! - `IDENTIFIERS: [&str; COUNT]`
//! - `LABELS: [&str; COUNT]`
//! - `find(label: &str) -> Option<usize>`
//! - `HANDLERS: [<handler>; COUNT]` (with `handler` only)

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Ident, LitStr, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};
use tablegen_core::{GeneratedTable, TableProfile, scan_table};

/// Parsed macro input:
/// `mod <name>; profile = "<name>"; path = "<file_path>"; [handler = <type>;]`
struct TableMacroInput {
    mod_name: Ident,      // Identifier for the generated module
    profile: LitStr,      // Name of the table profile
    path: LitStr,         // Literal string representing the file path
    handler: Option<Type>, // Function pointer type of the handlers, if wired
}

/// Parses `<key> = <value>` where `key` must be `expected`.
fn parse_key<T: Parse>(input: ParseStream, expected: &str) -> syn::Result<T> {
    let key: Ident = input.parse()?;
    if key != expected {
        return Err(syn::Error::new(
            key.span(),
            format!("Unexpected identifier `{key}`, expected `{expected}`"),
        ));
    }
    input.parse::<Token![=]>()?;
    input.parse()
}

impl Parse for TableMacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Expect: `mod <ident>;`
        input.parse::<Token![mod]>()?;
        let mod_name: Ident = input.parse()?;
        input.parse::<Token![;]>()?;

        let profile: LitStr = parse_key(input, "profile")?;
        input.parse::<Token![;]>()?;

        let path: LitStr = parse_key(input, "path")?;

        // The terminating `;` is optional unless more keys follow.
        let mut handler = None;
        if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
            if !input.is_empty() {
                handler = Some(parse_key::<Type>(input, "handler")?);
                if input.peek(Token![;]) {
                    input.parse::<Token![;]>()?;
                }
            }
        }

        Ok(TableMacroInput {
            mod_name,
            profile,
            path,
            handler,
        })
    }
}

pub fn define_table_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as TableMacroInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: TableMacroInput) -> syn::Result<TokenStream2> {
    let TableMacroInput {
        mod_name,
        profile,
        path,
        handler,
    } = input;

    let profile = TableProfile::by_name(&profile.value())
        .map_err(|e| syn::Error::new(profile.span(), e.to_string()))?;

    // Resolve path relative to the crate invoking the macro
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map_err(|e| syn::Error::new(path.span(), format!("CARGO_MANIFEST_DIR: {e}")))?;
    let full_path = std::path::Path::new(&manifest_dir).join(path.value());

    let table = scan_table(&full_path, &profile)
        .map_err(|e| syn::Error::new(path.span(), e.to_string()))?;

    let count = table.count();
    let identifiers: Vec<&str> = table.identifiers().collect();
    let labels: Vec<&str> = table.labels().collect();
    let handlers = match handler {
        Some(ty) => handlers_static(&table, &ty, &path)?,
        None => quote! {},
    };

    // Makes cargo rebuild the invoking crate when the header changes.
    let tracked = LitStr::new(&full_path.to_string_lossy(), path.span());

    Ok(quote! {
        pub mod #mod_name {
            const _: &[u8] = include_bytes!(#tracked);

            /// Number of table entries.
            pub const COUNT: usize = #count;

            /// Handler identifiers, in declaration order.
            pub const IDENTIFIERS: [&str; COUNT] = [ #( #identifiers ),* ];

            /// Labels, index-aligned with `IDENTIFIERS`.
            pub const LABELS: [&str; COUNT] = [ #( #labels ),* ];

            /// Index of the first entry carrying `label`.
            pub fn find(label: &str) -> Option<usize> {
                LABELS.iter().position(|l| *l == label)
            }

            #handlers
        }
    })
}

/// `HANDLERS` pointing at `super::<identifier>` for every entry.
fn handlers_static(table: &GeneratedTable, ty: &Type, path: &LitStr) -> syn::Result<TokenStream2> {
    let idents = table
        .entries()
        .iter()
        .map(|e| {
            syn::parse_str::<Ident>(&e.primary_identifier).map_err(|_| {
                syn::Error::new(
                    path.span(),
                    format!(
                        "line {}: `{}` cannot be used as a Rust identifier",
                        e.line_number, e.primary_identifier
                    ),
                )
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        /// Handlers, index-aligned with `IDENTIFIERS`.
        pub static HANDLERS: [#ty; COUNT] = [ #( super::#idents ),* ];
    })
}
