//! Flatten parent-referencing location records into display order.
//!
//! Output is a pre-order depth-first walk: every root (sorted by name),
//! followed by its children (sorted by name), each child followed by its
//! own subtree.
//!
//! Example (names shown with `·` for the non-breaking spaces):
//! ```text
//! Attic
//! Garage
//! ··↳ Shelf
//! ····↳ Box
//! ```

use super::collation::collate;
use crate::parser::schema::{FlattenedLocation, LocationRecord};
use crate::utils::config::{ValidationPolicy, CHILD_MARKER, INDENT_UNIT};
use crate::utils::error::HierarchyError;
use log::{debug, warn};
use std::collections::HashMap;

/// Flatten locations with the default (lenient) policy
///
/// Orphans are dropped silently; cycles and duplicate ids are still errors.
pub fn flatten(locations: &[LocationRecord]) -> Result<Vec<FlattenedLocation>, HierarchyError> {
    flatten_locations(locations, &ValidationPolicy::default())
}

/// Flatten locations into a depth-ordered, indentation-annotated list
///
/// **Public** - main entry point for hierarchy flattening
///
/// # Arguments
/// * `locations` - Records in any order; may be empty
/// * `policy` - Whether orphaned records are dropped or rejected
///
/// # Returns
/// One entry per reachable record, in display order
///
/// # Algorithm
/// 1. Index ids and reject duplicates
/// 2. Partition into roots and a `parent_id -> children` adjacency map
/// 3. Sort roots and every sibling list by name
/// 4. Walk with an explicit stack, guarding against revisits
/// 5. Classify whatever was not reached as an orphan or a cycle
///
/// # Errors
/// * `HierarchyError::DuplicateId` - Two records share an id
/// * `HierarchyError::Cycle` - Parent references loop
/// * `HierarchyError::Orphan` - A parent is missing (strict policy only)
pub fn flatten_locations(
    locations: &[LocationRecord],
    policy: &ValidationPolicy,
) -> Result<Vec<FlattenedLocation>, HierarchyError> {
    debug!("Flattening {} locations", locations.len());

    let index_by_id = index_ids(locations)?;

    let mut roots: Vec<usize> = Vec::new();
    let mut children: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, location) in locations.iter().enumerate() {
        match location.parent_id.as_deref() {
            None => roots.push(index),
            Some(parent_id) => children.entry(parent_id).or_default().push(index),
        }
    }

    sort_by_name(&mut roots, locations);
    for siblings in children.values_mut() {
        sort_by_name(siblings, locations);
    }

    let mut visited = vec![false; locations.len()];
    let mut flattened = Vec::with_capacity(locations.len());

    // Pushed in reverse so the smallest name pops first
    let mut stack: Vec<(usize, usize)> = roots.iter().rev().map(|&index| (index, 0)).collect();

    while let Some((index, level)) = stack.pop() {
        if std::mem::replace(&mut visited[index], true) {
            return Err(HierarchyError::Cycle(vec![locations[index].id.clone()]));
        }

        let location = &locations[index];
        flattened.push(flatten_entry(location, level));

        if let Some(kids) = children.get(location.id.as_str()) {
            stack.extend(kids.iter().rev().map(|&child| (child, level + 1)));
        }
    }

    let unreached = locations.len() - flattened.len();
    if unreached > 0 {
        check_unreached(locations, &index_by_id, &visited, policy)?;
        warn!("Dropped {} locations with a missing ancestor", unreached);
    }

    debug!("Flattened {} locations", flattened.len());
    Ok(flattened)
}

/// Build the rendering-ready name for a given depth
///
/// Level 0 keeps the plain name; deeper levels get two non-breaking spaces
/// per level followed by the child marker.
pub fn display_name(name: &str, level: usize) -> String {
    if level == 0 {
        return name.to_string();
    }
    format!("{}{}{}", INDENT_UNIT.repeat(level), CHILD_MARKER, name)
}

/// Copy a record into its flattened form
///
/// **Private** - internal helper for flatten_locations
fn flatten_entry(location: &LocationRecord, level: usize) -> FlattenedLocation {
    FlattenedLocation {
        id: location.id.clone(),
        name: display_name(&location.name, level),
        original_name: location.name.clone(),
        parent_id: location.parent_id.clone(),
        level,
        extra: location.extra.clone(),
    }
}

/// Map ids to input positions
///
/// **Private** - internal helper for flatten_locations
fn index_ids(locations: &[LocationRecord]) -> Result<HashMap<&str, usize>, HierarchyError> {
    let mut index_by_id = HashMap::with_capacity(locations.len());
    for (index, location) in locations.iter().enumerate() {
        if index_by_id.insert(location.id.as_str(), index).is_some() {
            return Err(HierarchyError::DuplicateId(location.id.clone()));
        }
    }
    Ok(index_by_id)
}

/// Stable sort of record positions by collated name
///
/// **Private** - internal helper for flatten_locations
fn sort_by_name(indices: &mut [usize], locations: &[LocationRecord]) {
    indices.sort_by(|&a, &b| collate(&locations[a].name, &locations[b].name));
}

/// Walk the parent chain of every record the traversal never reached
///
/// Each chain either loops (a cycle, always rejected) or ends at a parent id
/// that is not in the input (an orphan, rejected only under a strict policy).
/// Chains already known to end at an orphan are not walked twice.
///
/// **Private** - internal helper for flatten_locations
fn check_unreached(
    locations: &[LocationRecord],
    index_by_id: &HashMap<&str, usize>,
    visited: &[bool],
    policy: &ValidationPolicy,
) -> Result<(), HierarchyError> {
    let mut orphaned = vec![false; locations.len()];

    for start in (0..locations.len()).filter(|&i| !visited[i]) {
        let mut chain: Vec<usize> = Vec::new();
        let mut on_chain: HashMap<usize, usize> = HashMap::new();
        let mut current = start;

        loop {
            if orphaned[current] {
                break;
            }
            if let Some(&position) = on_chain.get(&current) {
                let mut ids: Vec<String> = chain[position..]
                    .iter()
                    .map(|&i| locations[i].id.clone())
                    .collect();
                ids.push(locations[current].id.clone());
                return Err(HierarchyError::Cycle(ids));
            }
            on_chain.insert(current, chain.len());
            chain.push(current);

            // Unvisited records always have a parent id: roots are always reached
            let Some(parent_id) = locations[current].parent_id.as_deref() else {
                break;
            };

            match index_by_id.get(parent_id) {
                Some(&parent) => current = parent,
                None => {
                    if policy.reject_orphans {
                        return Err(HierarchyError::Orphan {
                            id: locations[current].id.clone(),
                            parent_id: parent_id.to_string(),
                        });
                    }
                    debug!(
                        "Location {} references missing parent {}",
                        locations[current].id, parent_id
                    );
                    break;
                }
            }
        }

        for index in chain {
            orphaned[index] = true;
        }
    }

    Ok(())
}
