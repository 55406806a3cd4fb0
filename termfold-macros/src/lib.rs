use convert_case::{Case, Casing};
use darling::util::Flag;
use darling::FromField;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, GenericArgument, PathArguments,
    Type,
};

#[proc_macro_derive(Fields, attributes(fields))]
pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let DeriveInput {
        ident,
        data,
        generics,
        ..
    } = parse_macro_input!(input as DeriveInput);

    if !generics.params.is_empty() {
        panic!("Derive can only be used on types without generic parameters");
    }

    let data = match data {
        Data::Struct(data) => data,
        _ => panic!("Derive can only be used on struct types"),
    };

    let info = collect(&data);

    let expanded = expand_fields(&ident, &info);

    proc_macro::TokenStream::from(expanded)
}

fn expand_fields(ident: &Ident, info: &[Field]) -> TokenStream {
    let accessors = info.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        let read = match field.kind {
            Kind::Required => quote! { Some(value.#member.as_str()) },
            Kind::Optional => quote! { value.#member.as_deref() },
        };

        quote! {
            termfold::accessor::Accessor::new(#name, |value: &#ident| #read)
        }
    });

    quote! {
        impl termfold::accessor::Fields for #ident {
            fn fields() -> Vec<termfold::accessor::Accessor<Self>> {
                vec![ #(#accessors, )* ]
            }
        }
    }
}

struct Field {
    ident: Ident,
    name: String,
    kind: Kind,
}

#[derive(Copy, Clone)]
enum Kind {
    /// `String`
    Required,
    /// `Option<String>`
    Optional,
}

#[derive(FromField, Default)]
#[darling(default, attributes(fields))]
struct FieldOpts {
    skip: Flag,
    rename: Option<String>,
}

fn collect(data: &DataStruct) -> Vec<Field> {
    let named = match &data.fields {
        Fields::Named(named) => named,
        _ => panic!("Derive can only be used on structs with named fields"),
    };

    let mut fields = vec![];

    for field in &named.named {
        let opts = FieldOpts::from_field(field).expect("Unable to parse field options");
        if opts.skip.is_present() {
            continue;
        }

        let Some(ident) = field.ident.clone() else {
            continue;
        };

        let kind = match kind(&field.ty) {
            Some(kind) => kind,
            None => panic!(
                "Field '{ident}' must be of type String or Option<String>, use #[fields(skip)] to ignore it"
            ),
        };

        let name = opts
            .rename
            .unwrap_or_else(|| ident.to_string().to_case(Case::Camel));

        fields.push(Field { ident, name, kind });
    }

    fields
}

fn kind(ty: &Type) -> Option<Kind> {
    let segment = match ty {
        Type::Path(path) => path.path.segments.last()?,
        _ => return None,
    };

    match (segment.ident.to_string().as_str(), &segment.arguments) {
        ("String", PathArguments::None) => Some(Kind::Required),
        ("Option", PathArguments::AngleBracketed(args)) => match args.args.first()? {
            GenericArgument::Type(inner) => match kind(inner)? {
                Kind::Required => Some(Kind::Optional),
                Kind::Optional => None,
            },
            _ => None,
        },
        _ => None,
    }
}
