use proc_macro2::TokenStream;
use quote::{ToTokens, quote, quote_spanned};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident, Index,
    parse::{Parse, ParseStream, Result as ParseResult},
    parse_quote,
    spanned::Spanned,
};

pub struct DeriveNumBits {
    ident: Ident,
    generics: Generics,
    data: Data,
}

impl Parse for DeriveNumBits {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let DeriveInput {
            ident,
            mut generics,
            data,
            ..
        } = input.parse()?;
        if !matches!(data, Data::Struct(_)) {
            return Err(syn::Error::new(
                ident.span(),
                "NumBits can only be derived for structs",
            ));
        }
        for param in &mut generics.params {
            if let GenericParam::Type(ref mut type_param) = *param {
                type_param
                    .bounds
                    .push(parse_quote!(scaledui_serialization::NumBits));
            }
        }
        Ok(Self {
            ident,
            generics,
            data,
        })
    }
}

impl ToTokens for DeriveNumBits {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.ident;
        let (impl_generics, ty_generics, where_clause) = &self.generics.split_for_impl();
        let call_site = ::proc_macro2::Span::call_site();
        let var = quote!(self);
        let add_to_count = match &self.data {
            Data::Struct(data) => match data.fields {
                Fields::Named(ref fields) => {
                    let recurse = fields.named.iter().map(|f| {
                        let name = &f.ident;
                        let access = quote_spanned!(call_site => #var.#name);
                        quote_spanned! { f.span() =>
                            count += scaledui_serialization::NumBits::num_bits(&#access);
                        }
                    });
                    quote! {
                        #(#recurse)*
                    }
                }
                Fields::Unnamed(ref fields) => {
                    let recurse = fields.unnamed.iter().enumerate().map(|(i, f)| {
                        let index = Index {
                            index: i as u32,
                            span: call_site,
                        };
                        let access = quote_spanned!(call_site => #var.#index);
                        quote_spanned! { f.span() =>
                            count += scaledui_serialization::NumBits::num_bits(&#access);
                        }
                    });
                    quote! {
                        #(#recurse)*
                    }
                }
                Fields::Unit => {
                    quote! {}
                }
            },
            Data::Enum(_) | Data::Union(_) => unreachable!("rejected in parse"),
        };

        let expanded = quote! {
            #[automatically_derived]
            #[allow(unused_qualifications, unused_mut)]
            impl #impl_generics scaledui_serialization::NumBits for #name #ty_generics #where_clause {
                #[inline]
                fn num_bits(&self) -> usize {
                    let mut count = 0;
                    #add_to_count
                    count
                }
            }
        };
        expanded.to_tokens(tokens);
    }
}
