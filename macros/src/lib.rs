use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;

/// Declare a color model from its three color components.
///
/// The struct gets a public `alpha` field appended, the value derives every
/// model shares and an `impl` with `new` and `with_alpha`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<TokenStream2> {
    if input.fields.len() != 3 {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Models must have exactly 3 fields, one for each component of the color.",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Models can not be generic.",
        ));
    }

    // Components are always accessible by name.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let (names, types): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();

    let ident = input.ident.clone();
    let syn::Fields::Named(ref mut named) = input.fields else {
        return Err(syn::Error::new_spanned(
            ident,
            "Model components must be named.",
        ));
    };

    named.named.push(syn::Field::parse_named.parse2(quote! {
        /// The alpha component of the color.
        pub alpha: crate::color::Component
    })?);

    input.attrs.extend(syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    })?);

    let struct_name = &input.ident;

    Ok(quote! {
        #input

        impl #struct_name {
            /// Create a new color from its components and alpha.
            pub const fn new(
                #(#names: #types,)*
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #(#names,)*
                    alpha,
                }
            }

            /// Return a copy of this color with the alpha component replaced.
            pub const fn with_alpha(self, alpha: crate::color::Component) -> Self {
                Self { alpha, ..self }
            }
        }
    })
}
