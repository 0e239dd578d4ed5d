//! Data-transfer objects exchanged with the configurator API.

mod configuration;
mod configuration_models;
mod layout;
mod linked_configuration_overview;
mod overview;
mod quotation;
mod settings;

pub use configuration::{
    CameraPosition, ConfigurationConflict, ConfigurationData, ConfigurationFeature,
    ConfigurationRequirement, ConfigurationStep, ConfigurationValue, ConfiguratorImage,
    ConflictType, FeatureModelRelationshipDisplayType, FeatureModelRelationshipType, FeatureType,
    LinkedConfiguration, LinkedConfigurationModel, Mapped3dItems, StepType,
};
pub use configuration_models::{ConfigurationModel, ConfigurationModelCategory, ConfigurationModels};
pub use layout::{Layout2d, Layout2dType, Layout3d, Material, MaterialType};
pub use linked_configuration_overview::{
    LinkedConfigurationOverview, LinkedConfigurationOverviewItem,
};
pub use overview::{Overview, OverviewGroups, OverviewLine, OverviewText, VisibleSteps};
pub use quotation::QuotationRequest;
pub use settings::{
    AfterOrderText, Country, Language, Settings, ShowroomFeatureModelSettings, WelcomePageText,
};
