use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Field, Fields, ItemStruct,
    parse::{Nothing, Parser},
    parse_macro_input,
};

extern crate proc_macro;

/// Implements `crate::event::Event` for a struct, using the struct name as
/// the event name.
#[proc_macro_derive(Event)]
pub fn event(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let name = &input.ident;

    quote! {
        impl crate::event::Event for #name {
            fn get_name_static() -> &'static str {
                stringify!(#name)
            }

            fn get_name(&self) -> &'static str {
                stringify!(#name)
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
    .into()
}

/// Adds a `cancelled` field to an event struct and implements
/// `crate::event::Cancellable` over it.
#[proc_macro_attribute]
pub fn cancellable(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_struct = parse_macro_input!(input as ItemStruct);
    let name = item_struct.ident.clone();
    let _ = parse_macro_input!(args as Nothing);

    let Fields::Named(ref mut fields) = item_struct.fields else {
        return syn::Error::new_spanned(&item_struct, "cancellable events need named fields")
            .to_compile_error()
            .into();
    };

    let field = match Field::parse_named.parse2(quote! {
        /// A boolean indicating cancel state of the event.
        pub cancelled: bool
    }) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };
    fields.named.push(field);

    quote! {
        #item_struct

        impl crate::event::Cancellable for #name {
            fn cancelled(&self) -> bool {
                self.cancelled
            }

            fn set_cancelled(&mut self, cancelled: bool) {
                self.cancelled = cancelled;
            }
        }
    }
    .into()
}
