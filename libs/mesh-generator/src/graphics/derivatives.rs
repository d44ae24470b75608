//! Discovery of node derivative versions.
//!
//! A node may carry several versions of a derivative where elements meet
//! with different directions. One arrow graphics is drawn per version, so
//! the highest version in use is needed for each derivative.

use config::constants::NODE_DERIVATIVE_LABELS;

/// Number of node derivatives that can be drawn.
pub const NODE_DERIVATIVE_COUNT: usize = NODE_DERIVATIVE_LABELS.len();

/// Read access to node parameters of the coordinate field.
pub trait NodeParameterQuery {
    fn node_count(&self) -> usize;

    /// True if node `node` has parameters for derivative `derivative`
    /// (index into the node derivative labels) at `version` (1-based).
    fn has_node_parameters(&self, node: usize, derivative: usize, version: u32) -> bool;
}

/// Highest version present for each node derivative, at least 1.
///
/// Versions are probed one above the last found for each derivative; a
/// derivative drops out the first time no node has the next version. Node
/// scanning stops early once every remaining derivative has been found.
///
/// Probing continues while any derivative gained a version in the last
/// pass, rather than stopping as soon as every derivative has gained one, so
/// a derivative with more versions than the others is still fully counted.
pub fn max_derivative_versions<Q>(query: &Q) -> [u32; NODE_DERIVATIVE_COUNT]
where
    Q: NodeParameterQuery + ?Sized,
{
    let mut max_versions = [1u32; NODE_DERIVATIVE_COUNT];
    let node_count = query.node_count();
    let mut version = 2;
    loop {
        let mut pending: Vec<usize> = (0..NODE_DERIVATIVE_COUNT)
            .filter(|&derivative| max_versions[derivative] == version - 1)
            .collect();
        if pending.is_empty() {
            break;
        }
        let mut gained = false;
        for node in 0..node_count {
            if pending.is_empty() {
                break;
            }
            pending.retain(|&derivative| {
                if query.has_node_parameters(node, derivative, version) {
                    max_versions[derivative] = version;
                    gained = true;
                    false
                } else {
                    true
                }
            });
        }
        if !gained {
            break;
        }
        version += 1;
    }
    max_versions
}
