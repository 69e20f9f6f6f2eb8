//! Erzeuge From-Implementierung für alle Varianten eines Enums, die genau ein Element halten.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, FieldsNamed, FieldsUnnamed, ItemEnum};

/// Erzeuge eine [`From`]-Implementierung für jede Variante mit genau einem Feld.
///
/// Varianten ohne oder mit mehreren Feldern werden ignoriert.
/// Generische Parameter des Enums werden übernommen.
pub(crate) fn impl_from(item: ItemEnum) -> TokenStream {
    let item_ident = item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let mut impls = Vec::new();
    for variant in item.variants {
        let var_ident = variant.ident;
        let (arg_teil, ty) = match &variant.fields {
            Fields::Named(FieldsNamed { named, .. }) if named.len() == 1 => {
                let Some(Field { ident, ty, .. }) = named.first() else { continue };
                (quote!({ #ident: input }), ty)
            },
            Fields::Unnamed(FieldsUnnamed { unnamed, .. }) if unnamed.len() == 1 => {
                let Some(Field { ty, .. }) = unnamed.first() else { continue };
                (quote!((input)), ty)
            },
            Fields::Named(_) | Fields::Unnamed(_) | Fields::Unit => continue,
        };
        impls.push(quote!(
            impl #impl_generics From<#ty> for #item_ident #ty_generics #where_clause {
                fn from(input: #ty) -> Self {
                    Self::#var_ident #arg_teil
                }
            }
        ));
    }

    quote!(#(#impls)*)
}
