//! Gauss-Legendre quadrature nodes and weights.
//!
//! Closed-form nodes and weights on the canonical `[-1, 1]` interval for the
//! small degrees used by the tesseroid forward model. The per-axis rules are
//! computed once per computation call and shared read-only across all
//! tesseroids and observation points.

/// A single unscaled quadrature node with its weight.
#[derive(Debug, Clone, Copy)]
pub struct GlqNode {
    /// Node location on [-1, 1]
    pub node: f64,
    /// Integration weight
    pub weight: f64,
}

impl GlqNode {
    fn new(node: f64, weight: f64) -> Self {
        Self { node, weight }
    }
}

/// 1D Gauss-Legendre rule on [-1, 1] for the given degree.
///
/// Degrees 1 through 5 are supported; degree 0 is treated as 1 and higher
/// degrees fall back to degree 5. Weights sum to 2 and nodes are symmetric
/// about 0.
pub fn legendre_rule(degree: usize) -> Vec<GlqNode> {
    match degree {
        0 | 1 => vec![GlqNode::new(0.0, 2.0)],
        2 => {
            let x = 1.0 / 3.0_f64.sqrt();
            vec![GlqNode::new(-x, 1.0), GlqNode::new(x, 1.0)]
        }
        3 => {
            let x = (3.0 / 5.0_f64).sqrt();
            vec![
                GlqNode::new(-x, 5.0 / 9.0),
                GlqNode::new(0.0, 8.0 / 9.0),
                GlqNode::new(x, 5.0 / 9.0),
            ]
        }
        4 => {
            let a = (3.0 / 7.0 - 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let b = (3.0 / 7.0 + 2.0 / 7.0 * (6.0 / 5.0_f64).sqrt()).sqrt();
            let wa = (18.0 + 30.0_f64.sqrt()) / 36.0;
            let wb = (18.0 - 30.0_f64.sqrt()) / 36.0;
            vec![
                GlqNode::new(-b, wb),
                GlqNode::new(-a, wa),
                GlqNode::new(a, wa),
                GlqNode::new(b, wb),
            ]
        }
        5 => {
            let a = (5.0 - 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let b = (5.0 + 2.0 * (10.0 / 7.0_f64).sqrt()).sqrt() / 3.0;
            let wa = (322.0 + 13.0 * 70.0_f64.sqrt()) / 900.0;
            let wb = (322.0 - 13.0 * 70.0_f64.sqrt()) / 900.0;
            vec![
                GlqNode::new(-b, wb),
                GlqNode::new(-a, wa),
                GlqNode::new(0.0, 128.0 / 225.0),
                GlqNode::new(a, wa),
                GlqNode::new(b, wb),
            ]
        }
        _ => legendre_rule(5),
    }
}

/// Per-axis quadrature rules for the longitude, latitude and radius axes.
#[derive(Debug, Clone)]
pub struct GlqTable {
    /// Longitude axis nodes and weights
    pub lon: Vec<GlqNode>,
    /// Latitude axis nodes and weights
    pub lat: Vec<GlqNode>,
    /// Radius axis nodes and weights
    pub rad: Vec<GlqNode>,
}

impl GlqTable {
    /// Build the per-axis rules from the configured degrees
    /// (longitude, latitude, radius).
    pub fn new(degrees: [usize; 3]) -> Self {
        Self {
            lon: legendre_rule(degrees[0]),
            lat: legendre_rule(degrees[1]),
            rad: legendre_rule(degrees[2]),
        }
    }
}
