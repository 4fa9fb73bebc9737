use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Repeat a test `n` times, passing as soon as one attempt does not panic. Used for scenario
/// tests that are driving a stochastic search and are allowed a handful of unlucky seeds.
#[proc_macro_attribute]
pub fn test_with_retries(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let tries = attrs
        .to_string()
        .parse::<u8>()
        .expect("attribute must be an integer number of attempts");

    let expanded = quote! {
        #[test]
        fn #fn_name() {
            #input_fn
            for attempt in 1..=#tries {
                println!("attempt #{attempt}");
                let result = std::panic::catch_unwind(|| { #fn_name() });
                if result.is_ok() {
                    return;
                }
                if attempt == #tries {
                    std::panic::resume_unwind(result.unwrap_err());
                }
            }
        }
    };
    expanded.into()
}
