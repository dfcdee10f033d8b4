//! Wire shapes for the upstream catalog API.
//!
//! Mirrors the PokeAPI JSON layout: an entity carries its labels inside
//! `types[].type`, a category lists its members inside `pokemon[].pokemon`.
//! Fields the gateway does not read are left undeclared.

use serde::Deserialize;

use crate::domain::{CatalogEntity, EntityRef};

#[derive(Debug, Deserialize)]
pub(super) struct NamedResourceDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TypeSlotDto {
    #[serde(rename = "type")]
    pub(super) label: NamedResourceDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct EntityDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) types: Vec<TypeSlotDto>,
}

impl EntityDto {
    /// Flatten the slot wrappers into the domain record, keeping order.
    pub(super) fn into_domain(self) -> CatalogEntity {
        CatalogEntity {
            name: self.name,
            types: self.types.into_iter().map(|slot| slot.label.name).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryMemberDto {
    pub(super) pokemon: NamedResourceDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoryDto {
    #[serde(default)]
    pub(super) pokemon: Vec<CategoryMemberDto>,
}

impl CategoryDto {
    /// Unwrap the member references in upstream order.
    pub(super) fn into_members(self) -> Vec<EntityRef> {
        self.pokemon
            .into_iter()
            .map(|member| EntityRef::new(member.pokemon.name, member.pokemon.url))
            .collect()
    }
}
