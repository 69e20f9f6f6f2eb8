//! Macros für zugsimulation.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod from;
#[proc_macro_derive(From)]
/// Erzeuge [`From`]-Implementierung für alle Varianten eines Enums, die genau ein Element halten.
pub fn from_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input);

    from::impl_from(ast).into()
}
