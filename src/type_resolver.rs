use crate::parser::ParsedFile;
use log::{debug, warn};
use std::collections::HashMap;

/// Index of the `struct` and `enum` definitions found in parsed source files.
///
/// The index is built once and never changes afterwards, so lookups only need `&self` and one
/// index can serve any number of concurrent schema resolutions.
pub struct TypeResolver {
    types: HashMap<String, ResolvedType>,
}

/// Type information for a use of a type, e.g. the type of a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// The base type name (e.g., "String", "User", "i32")
    pub name: String,
    /// Generic type arguments (e.g., for `Vec<String>`, contains TypeInfo for String)
    pub generic_args: Vec<TypeInfo>,
    /// Whether this type is wrapped in `Option<T>`
    pub is_option: bool,
    /// Whether this type is a `Vec<T>` (array type)
    pub is_vec: bool,
}

impl TypeInfo {
    /// Create a new TypeInfo for a simple type
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            generic_args: Vec::new(),
            is_option: false,
            is_vec: false,
        }
    }

    /// Create a TypeInfo for an `Option<T>` type
    pub fn option(inner: TypeInfo) -> Self {
        Self {
            name: inner.name.clone(),
            generic_args: vec![inner],
            is_option: true,
            is_vec: false,
        }
    }

    /// Create a TypeInfo for a `Vec<T>` type
    pub fn vec(inner: TypeInfo) -> Self {
        Self {
            name: inner.name.clone(),
            generic_args: vec![inner],
            is_option: false,
            is_vec: true,
        }
    }

    /// Parse a type written as Rust source, e.g. `Vec<Widget>`
    pub fn parse(source: &str) -> Option<Self> {
        match syn::parse_str::<syn::Type>(source) {
            Ok(ty) => Some(TypeResolver::extract_type_info(&ty)),
            Err(e) => {
                debug!("Not a Rust type: {} ({})", source, e);
                None
            }
        }
    }
}

/// Resolved type information
#[derive(Debug, Clone)]
pub struct ResolvedType {
    pub name: String,
    pub kind: TypeKind,
}

/// Type kind - represents different categories of types
#[derive(Debug, Clone)]
pub enum TypeKind {
    Struct(StructDef),
    Enum(EnumDef),
    Primitive(PrimitiveType),
}

#[derive(Debug, Clone)]
pub struct StructDef {
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub type_info: TypeInfo,
    /// Whether the field is wrapped in `Option<T>`
    pub optional: bool,
    pub serde_attrs: SerdeAttributes,
}

#[derive(Debug, Clone)]
pub struct EnumDef {
    pub variants: Vec<String>,
}

/// Primitive types supported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Bool,
    Char,
}

/// Serde attributes for a field
#[derive(Debug, Clone, Default)]
pub struct SerdeAttributes {
    pub rename: Option<String>,
    pub skip: bool,
}

impl TypeResolver {
    /// Index every top-level struct and enum in the given files.
    ///
    /// When two files define the same name, the first definition wins.
    pub fn new(parsed_files: &[ParsedFile]) -> Self {
        debug!("Indexing types from {} files", parsed_files.len());
        let mut types = HashMap::new();

        for parsed_file in parsed_files {
            for item in &parsed_file.syntax_tree.items {
                let resolved = match item {
                    syn::Item::Struct(item_struct) => Self::parse_struct_definition(item_struct),
                    syn::Item::Enum(item_enum) => Self::parse_enum_definition(item_enum),
                    _ => continue,
                };

                if types.contains_key(&resolved.name) {
                    warn!(
                        "Duplicate definition of {} in {}, keeping the first",
                        resolved.name,
                        parsed_file.path.display()
                    );
                    continue;
                }
                debug!("Indexed {} from {}", resolved.name, parsed_file.path.display());
                types.insert(resolved.name.clone(), resolved);
            }
        }

        Self { types }
    }

    /// Resolve a type by name; primitives are recognised without a definition
    pub fn resolve_type(&self, type_name: &str) -> Option<ResolvedType> {
        if let Some(primitive) = Self::parse_primitive_type(type_name) {
            return Some(ResolvedType {
                name: type_name.to_string(),
                kind: TypeKind::Primitive(primitive),
            });
        }

        let resolved = self.types.get(type_name).cloned();
        if resolved.is_none() {
            debug!("Type {} not found", type_name);
        }
        resolved
    }

    /// Number of indexed struct and enum definitions
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn parse_struct_definition(item_struct: &syn::ItemStruct) -> ResolvedType {
        let fields = match &item_struct.fields {
            syn::Fields::Named(named_fields) => named_fields
                .named
                .iter()
                .filter_map(Self::parse_field)
                .collect(),
            _ => Vec::new(),
        };

        ResolvedType {
            name: item_struct.ident.to_string(),
            kind: TypeKind::Struct(StructDef { fields }),
        }
    }

    fn parse_enum_definition(item_enum: &syn::ItemEnum) -> ResolvedType {
        let variants = item_enum
            .variants
            .iter()
            .map(|v| v.ident.to_string())
            .collect();

        ResolvedType {
            name: item_enum.ident.to_string(),
            kind: TypeKind::Enum(EnumDef { variants }),
        }
    }

    fn parse_field(field: &syn::Field) -> Option<FieldDef> {
        let name = field.ident.as_ref()?.to_string();
        let type_info = Self::extract_type_info(&field.ty);

        Some(FieldDef {
            name,
            optional: type_info.is_option,
            type_info,
            serde_attrs: Self::parse_serde_attributes(&field.attrs),
        })
    }

    fn parse_serde_attributes(attrs: &[syn::Attribute]) -> SerdeAttributes {
        let mut serde_attrs = SerdeAttributes::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            // Malformed serde attributes are left for rustc to report.
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    serde_attrs.rename = Some(value.value());
                } else if meta.path.is_ident("skip") {
                    serde_attrs.skip = true;
                } else if meta.input.peek(syn::Token![=]) {
                    // Consume the value of attributes we do not interpret.
                    let _: syn::Expr = meta.value()?.parse()?;
                }
                Ok(())
            });
        }

        serde_attrs
    }

    pub(crate) fn extract_type_info(ty: &syn::Type) -> TypeInfo {
        match ty {
            syn::Type::Path(type_path) => Self::extract_type_info_from_path(&type_path.path),
            syn::Type::Reference(reference) => Self::extract_type_info(&reference.elem),
            syn::Type::Paren(paren) => Self::extract_type_info(&paren.elem),
            syn::Type::Slice(slice) => TypeInfo::vec(Self::extract_type_info(&slice.elem)),
            _ => TypeInfo::new("Unknown"),
        }
    }

    fn extract_type_info_from_path(path: &syn::Path) -> TypeInfo {
        let Some(segment) = path.segments.last() else {
            return TypeInfo::new("Unknown");
        };
        let type_name = segment.ident.to_string();

        let generic_args: Vec<TypeInfo> = match &segment.arguments {
            syn::PathArguments::AngleBracketed(args) => args
                .args
                .iter()
                .filter_map(|arg| match arg {
                    syn::GenericArgument::Type(inner_ty) => Some(Self::extract_type_info(inner_ty)),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        let mut args = generic_args.into_iter();
        match (type_name.as_str(), args.next()) {
            ("Option", Some(inner)) => TypeInfo::option(inner),
            ("Vec", Some(inner)) => TypeInfo::vec(inner),
            ("Box" | "Rc" | "Arc", Some(inner)) => inner,
            (_, first) => TypeInfo {
                name: type_name,
                generic_args: first.into_iter().chain(args).collect(),
                is_option: false,
                is_vec: false,
            },
        }
    }

    fn parse_primitive_type(type_name: &str) -> Option<PrimitiveType> {
        match type_name {
            "String" | "str" => Some(PrimitiveType::String),
            "i8" => Some(PrimitiveType::I8),
            "i16" => Some(PrimitiveType::I16),
            "i32" => Some(PrimitiveType::I32),
            "i64" => Some(PrimitiveType::I64),
            "i128" => Some(PrimitiveType::I128),
            "isize" => Some(PrimitiveType::Isize),
            "u8" => Some(PrimitiveType::U8),
            "u16" => Some(PrimitiveType::U16),
            "u32" => Some(PrimitiveType::U32),
            "u64" => Some(PrimitiveType::U64),
            "u128" => Some(PrimitiveType::U128),
            "usize" => Some(PrimitiveType::Usize),
            "f32" => Some(PrimitiveType::F32),
            "f64" => Some(PrimitiveType::F64),
            "bool" => Some(PrimitiveType::Bool),
            "char" => Some(PrimitiveType::Char),
            _ => None,
        }
    }
}
