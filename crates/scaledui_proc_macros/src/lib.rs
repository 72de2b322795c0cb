//! Derives for the bit-level codec. Fields are encoded in declaration order.

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

mod num_bits;
mod read;
mod write;

#[proc_macro_derive(Read)]
pub fn derive_read(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as read::DeriveRead);
    quote!(#item).into()
}

#[proc_macro_derive(Write)]
pub fn derive_write(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as write::DeriveWrite);
    quote!(#item).into()
}

#[proc_macro_derive(NumBits)]
pub fn derive_num_bits(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as num_bits::DeriveNumBits);
    quote!(#item).into()
}
