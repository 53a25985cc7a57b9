//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, Fields, Item, ItemConst, ItemEnum, ItemFn, ItemStruct, Type};

/// Exposes a quote-engine item to javascript.
///
/// - structs and enums get serde + tsify derives, u64 fields cross the boundary as `bigint`;
/// - functions get a camelCase `wasm_bindgen` export;
/// - constants get a `_NAME` getter.
#[proc_macro_attribute]
pub fn wasm_expose(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as Item);
    let expanded = match item {
        Item::Struct(item) => expose_struct(item),
        Item::Enum(item) => expose_enum(item),
        Item::Fn(item) => expose_fn(item),
        Item::Const(item) => expose_const(item),
        other => syn::Error::new_spanned(other, "wasm_expose supports structs, enums, functions and constants").to_compile_error(),
    };
    expanded.into()
}

fn is_u64(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("u64"))
}

fn expose_struct(mut item: ItemStruct) -> TokenStream2 {
    if let Fields::Named(fields) = &mut item.fields {
        for field in fields.named.iter_mut() {
            if is_u64(&field.ty) {
                field.attrs.push(parse_quote!(#[serde(serialize_with = "crate::u64_serialize")]));
                field.attrs.push(parse_quote!(#[tsify(type = "bigint")]));
            }
        }
    }

    quote! {
        #[derive(::serde::Serialize, ::serde::Deserialize, ::tsify::Tsify)]
        #[serde(rename_all = "camelCase")]
        #[tsify(from_wasm_abi, into_wasm_abi)]
        #item
    }
}

fn expose_enum(item: ItemEnum) -> TokenStream2 {
    quote! {
        #[derive(::serde::Serialize, ::serde::Deserialize, ::tsify::Tsify)]
        #[tsify(from_wasm_abi, into_wasm_abi)]
        #item
    }
}

fn expose_fn(item: ItemFn) -> TokenStream2 {
    let js_name = to_camel_case(&item.sig.ident.to_string());
    quote! {
        #[::wasm_bindgen::prelude::wasm_bindgen(js_name = #js_name, skip_jsdoc)]
        #item
    }
}

fn expose_const(item: ItemConst) -> TokenStream2 {
    let ident = &item.ident;
    let getter = format_ident!("_{}", ident);
    let js_name = format!("_{}", ident);
    quote! {
        #item

        #[::wasm_bindgen::prelude::wasm_bindgen(js_name = #js_name, skip_jsdoc)]
        pub fn #getter() -> ::wasm_bindgen::JsValue {
            ::wasm_bindgen::JsValue::from(#ident)
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !result.is_empty();
            continue;
        }
        if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("swap_base_input"), "swapBaseInput");
        assert_eq!(to_camel_case("try_get_price_impact_bps"), "tryGetPriceImpactBps");
        assert_eq!(to_camel_case("withdraw_quote"), "withdrawQuote");
        assert_eq!(to_camel_case("_leading"), "leading");
        assert_eq!(to_camel_case("single"), "single");
    }

    #[test]
    fn test_is_u64() {
        assert!(is_u64(&parse_quote!(u64)));
        assert!(!is_u64(&parse_quote!(u32)));
        assert!(!is_u64(&parse_quote!(Option<u64>)));
    }
}
