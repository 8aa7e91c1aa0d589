//! Pedestrian elements for crowd-simulator scenario files.
//!
//! A scenario file is a JSON document whose `scenario.topography` object
//! holds a `targets` array and a `dynamicElements` array.  [`ScenarioFile`]
//! only touches those two arrays and the top-level `name`; everything else
//! round-trips untouched.  Running the external simulator is left to the
//! caller.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ped_entity::Pedestrian;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::{OutputError, OutputResult};

/// Suffix appended to the scenario name on save.
pub const MODIFIED_SUFFIX: &str = "_modified";

// ── Attributes ────────────────────────────────────────────────────────────────

/// How the external simulator picks a walking direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalkingDirection {
    #[default]
    ByTargetCenter,
    ByTargetClosestPoint,
    ByGradient,
}

/// Per-pedestrian attributes block.  Defaults mirror the simulator's own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub id:                                          i64,
    pub radius:                                      f64,
    pub density_dependent_speed:                     bool,
    pub speed_distribution_mean:                     f64,
    pub speed_distribution_standard_deviation:       f64,
    pub minimum_speed:                               f64,
    pub maximum_speed:                               f64,
    pub acceleration:                                f64,
    pub footstep_history_size:                       u32,
    pub search_radius:                               f64,
    pub walking_direction_calculation:               WalkingDirection,
    pub walking_direction_same_if_angle_less_or_equal: f64,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            id:                                    1,
            radius:                                0.2,
            density_dependent_speed:               false,
            speed_distribution_mean:               1.34,
            speed_distribution_standard_deviation: 0.26,
            minimum_speed:                         0.5,
            maximum_speed:                         2.2,
            acceleration:                          2.0,
            footstep_history_size:                 4,
            search_radius:                         1.0,
            walking_direction_calculation:         WalkingDirection::ByTargetCenter,
            walking_direction_same_if_angle_less_or_equal: 45.0,
        }
    }
}

impl Attributes {
    pub fn with_id(id: i64) -> Self {
        Self { id, ..Self::default() }
    }
}

/// Position in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Velocity in metres per second.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    pub foot_steps: Vec<Value>,
}

// ── DynamicPedestrian ─────────────────────────────────────────────────────────

/// A complete `dynamicElements` entry of type `PEDESTRIAN`.
///
/// Fields other than attributes, position, velocity, and target ids carry
/// the simulator's neutral defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPedestrian {
    pub attributes:                 Attributes,
    pub source:                     Option<Value>,
    /// Empty means "every target of the topography" once added to a file.
    pub target_ids:                 Vec<i64>,
    pub next_target_list_index:     u32,
    pub is_current_target_an_agent: bool,
    pub position:                   Position,
    pub velocity:                   Velocity,
    pub free_flow_speed:            f64,
    pub followers:                  Vec<Value>,
    pub id_as_target:               i64,
    pub is_child:                   bool,
    pub is_likely_injured:          bool,
    pub psychology_status:          Value,
    pub group_ids:                  Vec<Value>,
    pub group_sizes:                Vec<Value>,
    pub trajectory:                 Trajectory,
    pub model_pedestrian_map:       Map<String, Value>,
    #[serde(rename = "type")]
    pub kind:                       String,
}

fn default_psychology_status() -> Value {
    json!({
        "mostImportantStimulus": null,
        "threatMemory": {
            "allThreats": [],
            "latestThreatUnhandled": false
        },
        "selfCategory": "TARGET_ORIENTED",
        "groupMembership": "OUT_GROUP",
        "knowledgeBase": {
            "knowledge": []
        }
    })
}

impl DynamicPedestrian {
    pub const KIND: &'static str = "PEDESTRIAN";

    pub fn new(attributes: Attributes, position: Position, velocity: Velocity, target_ids: Vec<i64>) -> Self {
        Self {
            attributes,
            source: None,
            target_ids,
            next_target_list_index: 0,
            is_current_target_an_agent: false,
            position,
            velocity,
            free_flow_speed: 1.3,
            followers: Vec::new(),
            id_as_target: -1,
            is_child: false,
            is_likely_injured: false,
            psychology_status: default_psychology_status(),
            group_ids: Vec::new(),
            group_sizes: Vec::new(),
            trajectory: Trajectory::default(),
            model_pedestrian_map: Map::new(),
            kind: Self::KIND.to_owned(),
        }
    }

    /// Element for a grid pedestrian, positioned at `col * cell_size_m`,
    /// `row * cell_size_m` and heading for every target of the topography.
    pub fn from_pedestrian(pedestrian: &Pedestrian, id: i64, cell_size_m: f64) -> Self {
        let position = Position {
            x: f64::from(pedestrian.cell.col) * cell_size_m,
            y: f64::from(pedestrian.cell.row) * cell_size_m,
        };
        Self::new(Attributes::with_id(id), position, Velocity::default(), Vec::new())
    }
}

// ── ScenarioFile ──────────────────────────────────────────────────────────────

/// A loaded scenario document.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioFile {
    doc: Value,
}

impl ScenarioFile {
    pub fn load(path: &Path) -> OutputResult<Self> {
        let doc = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), "scenario loaded");
        Self::from_value(doc)
    }

    /// Wrap an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Scenario`] if `name` or the topography arrays
    /// are missing.
    pub fn from_value(doc: Value) -> OutputResult<Self> {
        let file = Self { doc };
        file.name_str()?;
        file.array("targets")?;
        file.array("dynamicElements")?;
        Ok(file)
    }

    pub fn name(&self) -> &str {
        self.name_str().unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    /// IDs of all targets in the topography, in file order.
    pub fn target_ids(&self) -> OutputResult<Vec<i64>> {
        self.array("targets")?
            .iter()
            .map(|t| {
                t.get("id")
                    .and_then(Value::as_i64)
                    .ok_or_else(|| OutputError::Scenario("target without integer `id`".into()))
            })
            .collect()
    }

    /// Number of entries in `dynamicElements`.
    pub fn dynamic_element_count(&self) -> usize {
        self.array("dynamicElements").map_or(0, Vec::len)
    }

    /// Append `pedestrian` to `dynamicElements`.  A pedestrian without
    /// target ids is sent to every target of the topography.
    pub fn add_pedestrian(&mut self, mut pedestrian: DynamicPedestrian) -> OutputResult<()> {
        if pedestrian.target_ids.is_empty() {
            pedestrian.target_ids = self.target_ids()?;
        }
        debug!(
            id      = pedestrian.attributes.id,
            x       = pedestrian.position.x,
            y       = pedestrian.position.y,
            targets = pedestrian.target_ids.len(),
            "adding pedestrian to scenario"
        );
        let element = serde_json::to_value(pedestrian)?;
        self.array_mut("dynamicElements")?.push(element);
        Ok(())
    }

    /// Suffix the name with [`MODIFIED_SUFFIX`] and write the document to
    /// `path`.
    pub fn save(&mut self, path: &Path) -> OutputResult<()> {
        let name = format!("{}{MODIFIED_SUFFIX}", self.name_str()?);
        self.doc["name"] = Value::String(name);
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut out, &self.doc)?;
        out.flush()?;
        info!(path = %path.display(), name = self.name(), "scenario saved");
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn name_str(&self) -> OutputResult<&str> {
        self.doc
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| OutputError::Scenario("missing string `name`".into()))
    }

    fn array(&self, key: &str) -> OutputResult<&Vec<Value>> {
        self.doc
            .pointer(&format!("/scenario/topography/{key}"))
            .and_then(Value::as_array)
            .ok_or_else(|| OutputError::Scenario(format!("missing array `scenario.topography.{key}`")))
    }

    fn array_mut(&mut self, key: &str) -> OutputResult<&mut Vec<Value>> {
        self.doc
            .pointer_mut(&format!("/scenario/topography/{key}"))
            .and_then(Value::as_array_mut)
            .ok_or_else(|| OutputError::Scenario(format!("missing array `scenario.topography.{key}`")))
    }
}
