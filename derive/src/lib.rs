use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse::Parser, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Meta};

/// 生成 Mapper trait 的实现
///
/// 自动生成 `TABLE`、`COLUMNS` 常量和 `values` 方法
///
/// 使用示例：
/// ```ignore
/// #[derive(Mapper)]
/// #[mapper(table = "region")]
/// struct Region {
///     region_id: i64,
///     #[column(name = "region_name")]
///     name: String,
///     parent_id: Option<i64>,
///     #[skip]
///     children: Vec<Region>,
/// }
/// ```
///
/// 未指定表名时使用结构体名称的 snake_case 形式。字段类型需要实现
/// `Into<minisql::BindValue>`，`Option` 字段为 `None` 时绑定 NULL。
#[proc_macro_derive(Mapper, attributes(mapper, column, skip))]
pub fn derive_mapper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let mut table_name = None;
    for attr in &input.attrs {
        if attr.path().is_ident("mapper") {
            if let Some(value) = string_arg(&attr.meta, "table") {
                table_name = Some(value);
            }
        }
    }

    // 如果没有指定表名，使用结构体名称的小写蛇形命名方式
    let table = table_name.unwrap_or_else(|| to_snake_case(&name.to_string()));

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                name,
                "Mapper derive only supports structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut field_names: Vec<&syn::Ident> = Vec::new();
    let mut field_columns: Vec<syn::LitStr> = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };

        let mut skip = false;
        let mut column = None;
        for attr in &field.attrs {
            if attr.path().is_ident("skip") {
                skip = true;
            } else if attr.path().is_ident("column") {
                column = string_arg(&attr.meta, "name");
            }
        }
        if skip {
            continue;
        }

        // `r#type` 这类原始标识符去掉 `r#` 前缀
        let column = column.unwrap_or_else(|| field_name.unraw().to_string());
        field_names.push(field_name);
        field_columns.push(syn::LitStr::new(&column, proc_macro2::Span::call_site()));
    }

    let expanded = quote! {
        impl ::minisql::Mapper for #name {
            const TABLE: &'static str = #table;
            const COLUMNS: &'static [&'static str] = &[#(#field_columns,)*];

            fn values(&self) -> ::std::vec::Vec<(&'static str, ::minisql::BindValue)> {
                ::std::vec![
                    #(
                        (#field_columns, ::minisql::BindValue::from(::std::clone::Clone::clone(&self.#field_names))),
                    )*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}

/// 从 `#[attr(key = "value")]` 或 `#[attr = "value"]` 中取出字符串参数
fn string_arg(meta: &Meta, key: &str) -> Option<String> {
    match meta {
        Meta::List(list) => {
            let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
            let metas = parser.parse2(list.tokens.clone()).ok()?;
            metas.into_iter().find_map(|meta| match meta {
                Meta::NameValue(nv) if nv.path.is_ident(key) => lit_str(&nv.value),
                _ => None,
            })
        }
        Meta::NameValue(nv) => lit_str(&nv.value),
        Meta::Path(_) => None,
    }
}

fn lit_str(expr: &syn::Expr) -> Option<String> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(s),
        ..
    }) = expr
    {
        Some(s.value())
    } else {
        None
    }
}

/// 将 PascalCase 转换为 snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}
