use darling::export::NestedMeta;
use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ReturnType, Type};

use crate::ctxt::Ctxt;

#[derive(Debug, FromMeta)]
struct Args {
}

pub fn cortex_m() -> TokenStream {
    quote! {
        #[::sketchbook::internal::cortex_m_rt::entry]
        fn main() -> ! {
            unsafe { ::sketchbook::internal::pre_init(); }
            let hw = unsafe { ::sketchbook::internal::init() };
            __sketch_main(hw)
        }
    }
}

pub fn run(args: &[NestedMeta], f: syn::ItemFn, main: TokenStream) -> Result<TokenStream, TokenStream> {
    #[allow(unused_variables)]
    let _args = Args::from_list(args).map_err(|e| e.write_errors())?;

    let fargs = f.sig.inputs.clone();

    let ctxt = Ctxt::new();

    if f.sig.asyncness.is_some() {
        ctxt.error_spanned_by(&f.sig, "main function must not be async; sketches block instead of awaiting");
    }
    if !f.sig.generics.params.is_empty() {
        ctxt.error_spanned_by(&f.sig, "main function must not be generic");
    }
    if !f.sig.generics.where_clause.is_none() {
        ctxt.error_spanned_by(&f.sig, "main function must not have `where` clauses");
    }
    if !f.sig.abi.is_none() {
        ctxt.error_spanned_by(&f.sig, "main function must not have an ABI qualifier");
    }
    if !f.sig.variadic.is_none() {
        ctxt.error_spanned_by(&f.sig, "main function must not be variadic");
    }
    match &f.sig.output {
        ReturnType::Type(_, ty) if matches!(&**ty, Type::Never(_)) => {}
        _ => ctxt.error_spanned_by(&f.sig, "main function must return `!`"),
    }

    if fargs.len() != 1 {
        ctxt.error_spanned_by(&f.sig, "main function must have 1 argument: the hardware.");
    }

    ctxt.check()?;

    let f_body = f.block;
    let attrs = &f.attrs;

    let result = quote! {
        #[doc(hidden)]
        #(#attrs)*
        fn __sketch_main(#fargs) -> ! {
            #f_body
        }

        #main
    };

    Ok(result)
}
