use proc_macro2::Span;
use syn::{Data, DeriveInput, Error, Fields, Ident, Meta, NestedMeta, Result, Variant};

/// Everything the expansion needs to know about the derived enum.
#[derive(Debug)]
pub struct EnumDef {
    pub name: Ident,
    pub repr: Ident,
    pub variants: Vec<Ident>,
    /// Index of the first meaningful label.
    pub begin: usize,
    /// Index of the past-the-end sentinel.
    pub end: usize,
}

const INT_REPRS: [&str; 10] = [
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// The integer type named in `#[repr(..)]`, or `i32` when the enum leaves
/// its representation to the compiler.
fn parse_repr(input: &DeriveInput) -> Result<Ident> {
    for attr in &input.attrs {
        if !attr.path.is_ident("repr") {
            continue;
        }
        if let Meta::List(list) = attr.parse_meta()? {
            for nested in list.nested {
                if let NestedMeta::Meta(Meta::Path(path)) = nested {
                    if let Some(ident) = path.get_ident() {
                        if INT_REPRS.iter().any(|repr| ident == repr) {
                            return Ok(ident.clone());
                        }
                    }
                }
            }
        }
    }
    Ok(Ident::new("i32", Span::call_site()))
}

struct VariantMeta {
    begin: bool,
    end: bool,
}

fn parse_variant_meta(variant: &Variant) -> Result<VariantMeta> {
    let mut meta = VariantMeta {
        begin: false,
        end: false,
    };
    let mut errors = Vec::new();

    for attr in &variant.attrs {
        if !attr.path.is_ident("enumerable") {
            continue;
        }
        match attr.parse_meta()? {
            Meta::List(list) => {
                for nested in &list.nested {
                    match nested {
                        NestedMeta::Meta(Meta::Path(path)) if path.is_ident("begin") => {
                            meta.begin = true;
                        }
                        NestedMeta::Meta(Meta::Path(path)) if path.is_ident("end") => {
                            meta.end = true;
                        }
                        other => errors.push(Error::new_spanned(
                            other,
                            "expected `begin` or `end`",
                        )),
                    }
                }
            }
            other => errors.push(Error::new_spanned(
                other,
                "expected #[enumerable(begin)] or #[enumerable(end)]",
            )),
        }
    }

    if let Some(error) = combine(errors) {
        return Err(error);
    }
    Ok(meta)
}

fn combine(mut errors: Vec<Error>) -> Option<Error> {
    errors.drain(..).fold(None, |acc: Option<Error>, x| {
        Some(match acc {
            Some(mut old_err) => {
                old_err.combine(x);
                old_err
            }
            None => x,
        })
    })
}

pub fn parse_enum(input: &DeriveInput) -> Result<EnumDef> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "Enumerable can only be derived for enums",
            ))
        }
    };

    let mut variants = Vec::new();
    let mut begin = None;
    let mut end = None;
    let mut explicit_discriminants = false;
    let mut errors = Vec::new();

    for (index, variant) in data.variants.iter().enumerate() {
        match variant.fields {
            Fields::Unit => {}
            _ => errors.push(Error::new_spanned(
                variant,
                "Enumerable variants cannot carry fields",
            )),
        }
        if variant.discriminant.is_some() {
            explicit_discriminants = true;
        }
        match parse_variant_meta(variant) {
            Ok(meta) => {
                if meta.begin {
                    if begin.is_some() {
                        errors.push(Error::new_spanned(
                            variant,
                            "second #[enumerable(begin)] marker",
                        ));
                    } else {
                        begin = Some(index);
                    }
                }
                if meta.end {
                    if end.is_some() {
                        errors.push(Error::new_spanned(
                            variant,
                            "second #[enumerable(end)] marker",
                        ));
                    } else {
                        end = Some(index);
                    }
                }
            }
            Err(error) => errors.push(error),
        }
        variants.push(variant.ident.clone());
    }

    // An unmarked variant named End serves as the sentinel.
    let end = end.or_else(|| variants.iter().position(|v| v == "End"));
    let begin = begin.unwrap_or(0);

    if variants.is_empty() {
        errors.push(Error::new_spanned(
            &input.ident,
            "Enumerable needs at least one variant to act as the past-the-end sentinel",
        ));
    } else if end.is_none() {
        errors.push(Error::new_spanned(
            &input.ident,
            "no past-the-end sentinel: mark a variant with #[enumerable(end)] or name it End",
        ));
    }

    // Without explicit discriminants declaration order is discriminant
    // order, so a begin marker past the sentinel can be rejected right here.
    // With explicit discriminants the ordering is settled by the const
    // check inside EnumRange.
    if let Some(end_index) = end {
        if !explicit_discriminants && begin > end_index {
            errors.push(Error::new_spanned(
                &data.variants[begin],
                "the begin marker is declared after the past-the-end sentinel",
            ));
        }
    }

    if let Some(error) = combine(errors) {
        return Err(error);
    }

    Ok(EnumDef {
        name: input.ident.clone(),
        repr: parse_repr(input)?,
        variants,
        begin,
        end: end.expect("missing end sentinel"),
    })
}
