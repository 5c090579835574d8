use gridpath_core::Coord;

/// A computed route: the visited coordinates from start to goal (both
/// included) and the total weight of the edges taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<Coord>,
    pub cost: u32,
}

impl Route {
    /// Number of coordinates on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of moves, one less than the number of coordinates.
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Coord> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<Coord> {
        self.nodes.last().copied()
    }

    /// Whether every step moves to a 4-directional neighbour.
    pub fn is_orthogonal(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].manhattan(w[1]) == 1)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r = Route {
            nodes: vec![Coord::new(0, 0).unwrap(), Coord::new(0, 1).unwrap()],
            cost: 3,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"nodes":[[0,0],[0,1]],"cost":3}"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
