use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a "resource"
/// (`TResource`) stored within some other data-store (`TSource`) without
/// holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// For example, a [`TypeAnnotation`](crate::types::TypeAnnotation) stores a
/// `NamedRef<TypeGraph, GraphQLType>` for its innermost type. This lets an
/// [`OperationTree`](crate::operation::OperationTree) parsed from a saved file
/// carry variable types without being tied to any particular
/// [`TypeGraph`](crate::schema::TypeGraph).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<
    TSource,
    TResource: DerefByName<Source=TSource>,
> {
    name: String,
    phantom: PhantomData<(TSource, TResource)>,
}
impl<
    TSource,
    TResource: DerefByName<Source=TSource>,
> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition found for `{0}`")]
    DanglingReference(String),
}
