use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_ref: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_ref
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner_type_ref.is_equivalent_to(&other.inner_type_ref)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
