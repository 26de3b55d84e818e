extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index};

/// Derives `dg_xch_serialize::ChiaSerialize`.
///
/// Structs are encoded field by field in declaration order. Fieldless enums
/// are encoded as a single byte and decoded through `TryFrom<u8>`, so an
/// enum deriving this must provide that conversion.
#[proc_macro_derive(ChiaSerial)]
pub fn derive_chia_serial(input: TokenStream) -> TokenStream {
    let input: DeriveInput = parse_macro_input!(input);
    let name = input.ident;
    let (write_bytes, read_bytes) = match create_codec(&name, input.data) {
        Ok(codec) => codec,
        Err(e) => return e.to_compile_error().into(),
    };
    let gen = quote! {
        impl dg_xch_serialize::ChiaSerialize for #name {
            fn write_bytes(&self, out: &mut Vec<u8>) {
                #write_bytes
            }
            fn read_bytes<T: AsRef<[u8]>>(bytes: &mut std::io::Cursor<T>) -> Result<Self, std::io::Error>
            where
                Self: Sized,
            {
                #read_bytes
            }
        }
    };
    gen.into()
}

fn create_codec(name: &syn::Ident, data: Data) -> Result<(TokenStream2, TokenStream2), syn::Error> {
    match data {
        Data::Struct(s) => match s.fields {
            Fields::Named(ref fields) => {
                let writes = fields.named.iter().map(|f| {
                    let field = &f.ident;
                    quote_spanned! {f.span()=>
                        dg_xch_serialize::ChiaSerialize::write_bytes(&self.#field, out);
                    }
                });
                let reads = fields.named.iter().map(|f| {
                    let field = &f.ident;
                    quote_spanned! {f.span()=>
                        #field: dg_xch_serialize::ChiaSerialize::read_bytes(bytes)?,
                    }
                });
                Ok((
                    quote! {
                        #(#writes)*
                    },
                    quote! {
                        Ok(Self {
                            #(#reads)*
                        })
                    },
                ))
            }
            Fields::Unnamed(ref fields) => {
                let writes = fields.unnamed.iter().enumerate().map(|(i, f)| {
                    let index = Index::from(i);
                    quote_spanned! {f.span()=>
                        dg_xch_serialize::ChiaSerialize::write_bytes(&self.#index, out);
                    }
                });
                let reads = fields.unnamed.iter().map(|f| {
                    quote_spanned! {f.span()=>
                        dg_xch_serialize::ChiaSerialize::read_bytes(bytes)?,
                    }
                });
                Ok((
                    quote! {
                        #(#writes)*
                    },
                    quote! {
                        Ok(Self(#(#reads)*))
                    },
                ))
            }
            Fields::Unit => Ok((
                quote! {
                    let _ = out;
                },
                quote! {
                    let _ = bytes;
                    Ok(Self)
                },
            )),
        },
        Data::Enum(e) => {
            if let Some(v) = e.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
                return Err(syn::Error::new(
                    v.span(),
                    "ChiaSerial only supports fieldless enums",
                ));
            }
            let enum_name = name.to_string();
            Ok((
                quote_spanned! {e.enum_token.span()=>
                    out.push(*self as u8);
                },
                quote_spanned! {e.enum_token.span()=>
                    let value: u8 = dg_xch_serialize::ChiaSerialize::read_bytes(bytes)?;
                    Self::try_from(value).map_err(|_| {
                        std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            format!("Invalid {} discriminant: {}", #enum_name, value),
                        )
                    })
                },
            ))
        }
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span(),
            "ChiaSerial does not support unions",
        )),
    }
}
