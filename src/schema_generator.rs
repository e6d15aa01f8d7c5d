use crate::document::Schema;
use crate::error::{Error, Result};
use crate::parser::{AstParser, ParsedFile};
use crate::resolver::{ResolvedSchema, SchemaResolver};
use crate::scanner::FileScanner;
use crate::type_resolver::{PrimitiveType, TypeInfo, TypeKind, TypeResolver};
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Schema generator - converts Rust types to OpenAPI schemas
///
/// A generator lives for a single resolution. Structs and enums are emitted once into the
/// component map and referenced by `$ref` everywhere they are used.
pub struct SchemaGenerator<'a> {
    type_resolver: &'a TypeResolver,
    /// Component schemas generated so far
    schemas: HashMap<String, Schema>,
    /// Types whose schema is currently being built
    in_progress: HashSet<String>,
}

impl<'a> SchemaGenerator<'a> {
    pub fn new(type_resolver: &'a TypeResolver) -> Self {
        Self {
            type_resolver,
            schemas: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Generate the schema used at a point of use: primitives and arrays inline, named types as
    /// references. Unknown types fall back to a bare object.
    pub fn generate_schema(&mut self, type_info: &TypeInfo) -> Schema {
        if type_info.is_option || type_info.is_vec {
            if let Some(inner) = type_info.generic_args.first() {
                let inner_schema = self.generate_schema(inner);
                return if type_info.is_vec {
                    Schema::array(inner_schema)
                } else {
                    inner_schema
                };
            }
        }

        match self.type_resolver.resolve_type(&type_info.name).map(|r| r.kind) {
            Some(TypeKind::Primitive(prim)) => Self::primitive_to_schema(&prim),
            Some(TypeKind::Struct(_)) | Some(TypeKind::Enum(_)) => {
                self.generate_component(&type_info.name);
                Schema::reference_to(&type_info.name)
            }
            None => {
                debug!("Unknown type: {}, using object placeholder", type_info.name);
                Schema::of_type("object", None)
            }
        }
    }

    /// Generate the full definition of a type, as opposed to a reference to it.
    ///
    /// Returns `None` when the type is neither a primitive nor an indexed definition.
    pub fn generate_definition(&mut self, type_info: &TypeInfo) -> Option<Schema> {
        if type_info.is_option || type_info.is_vec {
            let inner = type_info.generic_args.first()?;
            self.type_resolver.resolve_type(&inner.name)?;
            return Some(self.generate_schema(type_info));
        }

        match self.type_resolver.resolve_type(&type_info.name)?.kind {
            TypeKind::Primitive(prim) => Some(Self::primitive_to_schema(&prim)),
            TypeKind::Struct(_) | TypeKind::Enum(_) => {
                self.generate_component(&type_info.name);
                let mut schema = self.schemas.get(&type_info.name)?.clone();
                schema.name = Some(type_info.name.clone());
                Some(schema)
            }
        }
    }

    /// Component schemas produced by this generator
    pub fn into_schemas(self) -> HashMap<String, Schema> {
        self.schemas
    }

    fn primitive_to_schema(primitive: &PrimitiveType) -> Schema {
        let (schema_type, format) = match primitive {
            PrimitiveType::String | PrimitiveType::Char => ("string", None),
            PrimitiveType::I8 | PrimitiveType::I16 | PrimitiveType::I32 => ("integer", Some("int32")),
            PrimitiveType::U8 | PrimitiveType::U16 | PrimitiveType::U32 => ("integer", Some("int32")),
            PrimitiveType::I64
            | PrimitiveType::I128
            | PrimitiveType::Isize
            | PrimitiveType::U64
            | PrimitiveType::U128
            | PrimitiveType::Usize => ("integer", Some("int64")),
            PrimitiveType::F32 => ("number", Some("float")),
            PrimitiveType::F64 => ("number", Some("double")),
            PrimitiveType::Bool => ("boolean", None),
        };

        Schema::of_type(schema_type, format)
    }

    /// Make sure the component schema for a struct or enum exists
    fn generate_component(&mut self, type_name: &str) {
        if self.schemas.contains_key(type_name) || self.in_progress.contains(type_name) {
            return;
        }

        let Some(resolved) = self.type_resolver.resolve_type(type_name) else {
            return;
        };

        self.in_progress.insert(type_name.to_string());
        let schema = match resolved.kind {
            TypeKind::Struct(struct_def) => {
                debug!("Generating struct schema for: {}", type_name);
                let mut properties = HashMap::new();
                let mut required = Vec::new();

                for field in struct_def.fields.iter().filter(|f| !f.serde_attrs.skip) {
                    let field_name = field
                        .serde_attrs
                        .rename
                        .clone()
                        .unwrap_or_else(|| field.name.clone());

                    properties.insert(field_name.clone(), self.generate_schema(&field.type_info));
                    if !field.optional {
                        required.push(field_name);
                    }
                }

                Schema {
                    properties: Some(properties),
                    required: if required.is_empty() { None } else { Some(required) },
                    ..Schema::of_type("object", None)
                }
            }
            TypeKind::Enum(enum_def) => {
                debug!("Generating enum schema for: {}", type_name);
                Schema {
                    enum_values: Some(enum_def.variants),
                    ..Schema::of_type("string", None)
                }
            }
            TypeKind::Primitive(prim) => Self::primitive_to_schema(&prim),
        };
        self.in_progress.remove(type_name);

        self.schemas.insert(type_name.to_string(), schema);
    }
}

/// Resolves implementation types by static analysis of Rust source files.
///
/// # Example
///
/// ```no_run
/// use openapi_from_descriptors::resolver::SchemaResolver;
/// use openapi_from_descriptors::schema_generator::SourceSchemaResolver;
/// use std::path::Path;
///
/// let resolver = SourceSchemaResolver::from_project(Path::new("./my-api")).unwrap();
/// let resolved = resolver.resolve("Widget").unwrap();
/// println!("{} component schemas", resolved.referenced_schemas.len());
/// ```
pub struct SourceSchemaResolver {
    type_resolver: TypeResolver,
}

impl SourceSchemaResolver {
    pub fn new(parsed_files: &[ParsedFile]) -> Self {
        Self {
            type_resolver: TypeResolver::new(parsed_files),
        }
    }

    /// Scan and parse every Rust file under `root`
    pub fn from_project(root: &Path) -> anyhow::Result<Self> {
        info!("Indexing implementation types under {}", root.display());
        let scan_result = FileScanner::new(root.to_path_buf()).scan()?;
        for warning in &scan_result.warnings {
            warn!("{}", warning);
        }

        let parsed_files = AstParser::parse_files(&scan_result.rust_files);
        let resolver = Self::new(&parsed_files);
        info!(
            "Indexed {} types from {} files",
            resolver.type_resolver.len(),
            parsed_files.len()
        );
        Ok(resolver)
    }
}

impl SchemaResolver for SourceSchemaResolver {
    fn resolve(&self, type_name: &str) -> Result<ResolvedSchema> {
        debug!("Resolving implementation type: {}", type_name);
        let unresolved = || Error::unresolved(type_name);

        let type_info = TypeInfo::parse(type_name).ok_or_else(unresolved)?;
        let mut generator = SchemaGenerator::new(&self.type_resolver);
        let schema = generator
            .generate_definition(&type_info)
            .ok_or_else(unresolved)?;

        Ok(ResolvedSchema {
            schema,
            referenced_schemas: generator.into_schemas(),
        })
    }
}
