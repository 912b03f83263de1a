// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch records and the switch list with its lookup helpers.

use serde::{Deserialize, Serialize};

use crate::types::{SwitchKind, SwitchState};

/// A switch as reported by the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    /// Controller-assigned id, used to address the switch in routes.
    pub id: u32,
    /// User-visible name.
    pub name: String,
    /// Kind of switch; unrecognized kinds decode as
    /// [`SwitchKind::Unknown`].
    #[serde(rename = "type")]
    pub kind: SwitchKind,
    /// Current on/off state.
    pub status: SwitchState,
    /// `"yes"` when marked as a favorite in the controller UI.
    pub favorite: String,
    /// Dimmer level or radiator target; zero for plain switches.
    #[serde(default)]
    pub tte: f64,
}

impl Switch {
    /// Returns the state that would toggle this switch. Pure; the record is
    /// never mutated.
    #[must_use]
    pub fn reversed_status(&self) -> SwitchState {
        self.status.reverse()
    }
}

/// The list of switches from `/swlist`, with lookup helpers.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> homewizard_lib::Result<()> {
/// # let controller = homewizard_lib::Controller::new("192.168.1.20".parse().unwrap(), "secret");
/// let switches = controller.switches().await?;
/// if let Some(lamp) = switches.by_name("Reading lamp") {
///     println!("lamp is {}", lamp.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitchList(Vec<Switch>);

impl SwitchList {
    /// Returns the first switch with the given name, if any.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Switch> {
        self.0.iter().find(|sw| sw.name == name)
    }

    /// Returns the first switch with the given id, if any.
    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&Switch> {
        self.0.iter().find(|sw| sw.id == id)
    }

    /// Returns every switch of the given kind, in list order.
    pub fn of_kind(&self, kind: SwitchKind) -> impl Iterator<Item = &Switch> {
        self.0.iter().filter(move |sw| sw.kind == kind)
    }

    /// Returns the number of switches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all switches.
    pub fn iter(&self) -> std::slice::Iter<'_, Switch> {
        self.0.iter()
    }

    /// Returns the switches as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Switch] {
        &self.0
    }
}

impl From<Vec<Switch>> for SwitchList {
    fn from(switches: Vec<Switch>) -> Self {
        Self(switches)
    }
}

impl<'a> IntoIterator for &'a SwitchList {
    type Item = &'a Switch;
    type IntoIter = std::slice::Iter<'a, Switch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> SwitchList {
        SwitchList::from(vec![
            Switch {
                id: 0,
                name: "Reading lamp".to_string(),
                kind: SwitchKind::Switch,
                status: SwitchState::On,
                favorite: "no".to_string(),
                tte: 0.0,
            },
            Switch {
                id: 1,
                name: "Hallway".to_string(),
                kind: SwitchKind::Dimmer,
                status: SwitchState::Off,
                favorite: "yes".to_string(),
                tte: 75.0,
            },
            Switch {
                id: 2,
                name: "Hallway".to_string(),
                kind: SwitchKind::Switch,
                status: SwitchState::Off,
                favorite: "no".to_string(),
                tte: 0.0,
            },
        ])
    }

    #[test]
    fn by_name_returns_first_match() {
        let list = sample_list();
        let sw = list.by_name("Hallway").unwrap();
        assert_eq!(sw.id, 1);
        assert!(list.by_name("Attic").is_none());
    }

    #[test]
    fn by_id_finds_exact_match() {
        let list = sample_list();
        assert_eq!(list.by_id(2).unwrap().name, "Hallway");
        assert!(list.by_id(99).is_none());
    }

    #[test]
    fn of_kind_keeps_list_order() {
        let list = sample_list();
        let plain: Vec<_> = list.of_kind(SwitchKind::Switch).collect();
        assert_eq!(plain.len(), 2);
        assert_eq!(plain[0].id, 0);
        assert_eq!(plain[1].id, 2);
        assert_eq!(list.of_kind(SwitchKind::Radiator).count(), 0);
    }

    #[test]
    fn reversed_status_leaves_record_untouched() {
        let list = sample_list();
        let sw = list.by_id(0).unwrap();
        assert_eq!(sw.reversed_status(), SwitchState::Off);
        assert_eq!(sw.status, SwitchState::On);
    }

    #[test]
    fn decodes_wire_payload() {
        let json = r#"[
            {"id":0,"name":"Lamp","type":"switch","status":"on","favorite":"no"},
            {"id":1,"name":"Dimmed","type":"dimmer","status":"off","favorite":"yes","tte":42.0}
        ]"#;
        let list: SwitchList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.by_id(0).unwrap().tte, 0.0);
        assert_eq!(list.by_id(1).unwrap().tte, 42.0);
    }
}
