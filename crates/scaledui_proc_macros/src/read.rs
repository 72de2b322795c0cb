use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote, quote_spanned};
use syn::{
    Data, DeriveInput, Fields, GenericParam, Generics, Ident,
    parse::{Parse, ParseStream, Result as ParseResult},
    parse_quote,
    spanned::Spanned,
};

pub struct DeriveRead {
    ident: Ident,
    generics: Generics,
    data: Data,
}

impl Parse for DeriveRead {
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
                "Read can only be derived for structs",
            ));
        }
        for param in &mut generics.params {
            if let GenericParam::Type(ref mut type_param) = *param {
                type_param
                    .bounds
                    .push(parse_quote!(scaledui_serialization::Read));
            }
        }
        Ok(Self {
            ident,
            generics,
            data,
        })
    }
}

impl ToTokens for DeriveRead {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.ident;
        let (impl_generics, ty_generics, where_clause) = &self.generics.split_for_impl();
        let reads = match &self.data {
            Data::Struct(data) => match data.fields {
                Fields::Named(ref fields) => {
                    let field_reads = fields.named.iter().map(|f| {
                        let ident = &f.ident;
                        let ty = &f.ty;
                        quote_spanned! {f.span() =>
                            let #ident = <#ty as scaledui_serialization::Read>::read(slice, pos)?;
                        }
                    });
                    let field_names = fields.named.iter().map(|f| &f.ident);
                    quote! {
                        #(#field_reads)*
                        Ok(#name {
                            #(#field_names,)*
                        })
                    }
                }
                Fields::Unnamed(ref fields) => {
                    let field_reads = fields.unnamed.iter().enumerate().map(|(i, f)| {
                        let ty = &f.ty;
                        let ident = format_ident!("field_{}", i);
                        quote_spanned! {f.span() =>
                            let #ident = <#ty as scaledui_serialization::Read>::read(slice, pos)?;
                        }
                    });
                    let fields_list =
                        (0..fields.unnamed.len()).map(|i| format_ident!("field_{}", i));
                    quote! {
                        #(#field_reads)*
                        Ok(#name(
                            #(#fields_list,)*
                        ))
                    }
                }
                Fields::Unit => quote! { Ok(#name) },
            },
            Data::Enum(_) | Data::Union(_) => unreachable!("rejected in parse"),
        };

        let expanded = quote! {
            #[automatically_derived]
            #[allow(unused_qualifications, unused_variables)]
            impl #impl_generics scaledui_serialization::Read for #name #ty_generics #where_clause {
                #[inline]
                fn read(
                    slice: &scaledui_serialization::BitSlice<'_>,
                    pos: &mut usize,
                ) -> Result<Self, scaledui_serialization::ReadError> {
                    #reads
                }
            }
        };
        expanded.to_tokens(tokens);
    }
}
