use serde::{Deserialize, Deserializer, Serialize};

use super::configuration::Mapped3dItems;
use crate::serde::{null_as_default, null_or_else, wire_enum};

wire_enum! {
    pub enum Layout2dType {
        Standard = 0,
        Magnifier = 1,
    }
}

/// One image layer of a step's 2D composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout2d {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub step_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub z: f64,
    #[serde(rename = "type")]
    pub layout_type: Option<Layout2dType>,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_model_node_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_hidden: bool,
    pub creator_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub synced: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub inactive: bool,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
    pub organization_id: Option<String>,
    pub reference: Option<String>,
}

/// Placement of one configuration's model in a 3D scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout3d {
    #[serde(deserialize_with = "null_as_default")]
    pub configuration_id: String,
    pub urn: Option<String>,
    pub image_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub z: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rotation_y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mapped3d_items: Mapped3dItems,
    pub name: Option<String>,
}

wire_enum! {
    pub enum MaterialType {
        Normal = 0,
        Lambert = 1,
        Phong = 2,
    }
}

const MATERIAL_NAME: &str = "Material";
const WHITE: &str = "#ffffff";
const BLACK: &str = "#000000";
const SPECULAR: &str = "#111111";
const SHININESS: f64 = 30.0;
const REFRACTION_RATIO: f64 = 0.98;

/// `null` on these keys means the renderer default, same as an absent key.
macro_rules! null_falls_back {
    ($($name:ident: $ty:ty = $value:expr;)*) => {
        $(
            fn $name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                null_or_else(deserializer, || $value)
            }
        )*
    };
}

null_falls_back! {
    null_as_material_name: String = MATERIAL_NAME.to_string();
    null_as_white: String = WHITE.to_string();
    null_as_black: String = BLACK.to_string();
    null_as_specular: String = SPECULAR.to_string();
    null_as_one: f64 = 1.0;
    null_as_shininess: f64 = SHININESS;
    null_as_refraction_ratio: f64 = REFRACTION_RATIO;
}

/// Surface description applied to 3D items. Missing keys fall back to the
/// renderer defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Material {
    #[serde(deserialize_with = "null_as_material_name")]
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    #[serde(deserialize_with = "null_as_white")]
    pub color: String,
    #[serde(deserialize_with = "null_as_white")]
    pub ambient: String,
    #[serde(deserialize_with = "null_as_black")]
    pub emissive: String,
    #[serde(deserialize_with = "null_as_specular")]
    pub specular: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wireframe: bool,
    pub map: Option<String>,
    pub env_map: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub alpha_test: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub side: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub transparent: bool,
    #[serde(deserialize_with = "null_as_one")]
    pub opacity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fog: bool,
    pub light_map: Option<String>,
    pub specular_map: Option<String>,
    pub normal_map: Option<String>,
    pub bump_map: Option<String>,
    #[serde(deserialize_with = "null_as_one")]
    pub bump_scale: f64,
    #[serde(deserialize_with = "null_as_shininess")]
    pub shininess: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub metal: bool,
    #[serde(deserialize_with = "null_as_one")]
    pub reflectivity: f64,
    #[serde(deserialize_with = "null_as_refraction_ratio")]
    pub refraction_ratio: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub combine: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub env_map_mapping: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub texture_wrap_x: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub texture_wrap_y: i32,
    #[serde(deserialize_with = "null_as_one")]
    pub texture_repeat_x: f64,
    #[serde(deserialize_with = "null_as_one")]
    pub texture_repeat_y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub texture_flip_y: bool,
    pub preview_image_url: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: MATERIAL_NAME.to_string(),
            material_type: MaterialType::Normal,
            color: WHITE.to_string(),
            ambient: WHITE.to_string(),
            emissive: BLACK.to_string(),
            specular: SPECULAR.to_string(),
            wireframe: false,
            map: None,
            env_map: None,
            alpha_test: 0.0,
            side: 0,
            transparent: false,
            opacity: 1.0,
            fog: false,
            light_map: None,
            specular_map: None,
            normal_map: None,
            bump_map: None,
            bump_scale: 1.0,
            shininess: SHININESS,
            metal: false,
            reflectivity: 1.0,
            refraction_ratio: REFRACTION_RATIO,
            combine: 0,
            env_map_mapping: 0,
            texture_wrap_x: 0,
            texture_wrap_y: 0,
            texture_repeat_x: 1.0,
            texture_repeat_y: 1.0,
            texture_flip_y: false,
            preview_image_url: None,
        }
    }
}
