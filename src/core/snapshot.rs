use std::fs;
use std::path::Path;

use glam::Affine2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::traits::SceneNode;

use super::group::Group;
use super::polygon::Polygon;

/// Persistable form of a scene node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSnapshot {
    Polygon(Polygon),
    Group {
        transform: Affine2,
        children: Vec<NodeSnapshot>,
    },
}

impl NodeSnapshot {
    /// Rebuild the live node this snapshot was taken from
    pub fn into_node(self) -> Box<dyn SceneNode> {
        match self {
            NodeSnapshot::Polygon(polygon) => Box::new(polygon),
            NodeSnapshot::Group {
                transform,
                children,
            } => {
                let mut group = Group::new();
                group.set_transform(transform);
                for child in children {
                    group.add(child.into_node());
                }
                Box::new(group)
            }
        }
    }
}

/// Every persistable node of a scene, in paint order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub nodes: Vec<NodeSnapshot>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        info!("Saved {} node(s) to {}", self.nodes.len(), path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let snapshot = Self::from_json(&fs::read_to_string(path)?)?;
        info!("Loaded {} node(s) from {}", snapshot.nodes.len(), path.display());
        Ok(snapshot)
    }
}
