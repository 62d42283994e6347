//! Shapeshift form rules for a player character.
//!
//! `form-core` defines the form catalog, the pure derivations over it
//! (capabilities, stats, durations) and the controller that moves a character
//! between forms. All state mutation flows through
//! [`engine::TransformationController`]; the outside world is reached through
//! the oracles and collaborators in [`env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod form;
pub mod rules;
pub mod state;
pub mod view;

pub use config::FormConfig;
pub use engine::{
    DurationStatus, FormTransition, MeldPlan, TransformAction, TransformError, TransformReport,
    TransformationController, TransitionPhase, TransitionPhaseError, TransitionResult,
    UntransformReport,
};
pub use env::{
    ArmourKind, BaselineOracle, BaselineProfile, ConfigOracle, DraconianColour, EquipmentError,
    EquipmentStore, Env, FormEnv, ItemDescriptor, ItemKind, MemoryEquipment, MessageChannel,
    MessageLog, MessageSink, OracleError, PcgRng, RngOracle, TerrainFeature, TerrainOracle,
};
pub use error::{ErrorContext, ErrorSeverity, RuleError};
pub use form::{
    AttackVerbs, Brand, Capability, DurationScaling, DurationSpec, EquipSlot, EquipSlots,
    FormContext, FormDefinition, FormId, FormRegistry, MonsterKind, ResistFlags, ResistLevel,
    SizeCategory, UnknownFormId,
};
pub use rules::{CapabilityResolver, DurationModel, Stat, StatDeriver};
pub use state::ActiveFormState;
pub use view::FormView;
