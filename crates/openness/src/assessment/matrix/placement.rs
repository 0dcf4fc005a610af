use serde::Serialize;
use std::f64::consts::TAU;

/// Offset, in points, for a label whose marker stands alone.
pub const SOLO_OFFSET: (f64, f64) = (10.0, 10.0);
/// Default ring radius, in points, for labels sharing one marker position.
pub const CLUSTER_RADIUS: f64 = 18.0;

/// Where to draw one scatter label relative to its marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    /// Clustered labels are centred on their offset; solo labels hang from it.
    pub centered: bool,
}

fn grid_key(value: f64) -> i64 {
    (value * 1000.0).round() as i64
}

/// Spreads labels of coincident points on a ring so they do not overlap.
///
/// Points are grouped on coordinates rounded to three decimals, groups keep the
/// order in which they first appear.
pub fn place_labels<'a, I>(points: I, radius: f64) -> Vec<LabelPlacement>
where
    I: IntoIterator<Item = (&'a str, f64, f64)>,
{
    let mut groups: Vec<((i64, i64), Vec<&'a str>)> = Vec::new();
    for (name, x, y) in points {
        let key = (grid_key(x), grid_key(y));
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, names)) => names.push(name),
            None => groups.push((key, vec![name])),
        }
    }

    let mut placements = Vec::new();
    for ((gx, gy), names) in groups {
        let x = gx as f64 / 1000.0;
        let y = gy as f64 / 1000.0;

        if let [name] = names.as_slice() {
            placements.push(LabelPlacement {
                name: name.to_string(),
                x,
                y,
                dx: SOLO_OFFSET.0,
                dy: SOLO_OFFSET.1,
                centered: false,
            });
            continue;
        }

        let count = names.len() as f64;
        for (index, name) in names.into_iter().enumerate() {
            let angle = TAU * index as f64 / count;
            placements.push(LabelPlacement {
                name: name.to_string(),
                x,
                y,
                dx: radius * angle.cos(),
                dy: radius * angle.sin(),
                centered: true,
            });
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_points_get_fixed_offset() {
        let placements = place_labels([("Engagement", 2.5, 3.0), ("Research", 1.0, 1.0)], 18.0);
        assert_eq!(placements.len(), 2);
        assert!(placements.iter().all(|label| !label.centered));
        assert!(placements
            .iter()
            .all(|label| (label.dx, label.dy) == SOLO_OFFSET));
    }

    #[test]
    fn coincident_points_are_spread_on_a_ring() {
        let placements = place_labels(
            [
                ("Engagement", 2.0, 2.0),
                ("Application", 2.0004, 2.0),
                ("Interaction", 3.0, 1.0),
                ("Research", 2.0, 1.9999),
            ],
            18.0,
        );

        assert_eq!(placements.len(), 4);
        let cluster: Vec<_> = placements.iter().filter(|label| label.centered).collect();
        assert_eq!(cluster.len(), 3);
        assert_eq!(cluster[0].name, "Engagement");
        assert!((cluster[0].dx - 18.0).abs() < 1e-9);
        assert!(cluster[0].dy.abs() < 1e-9);
        let radius = (cluster[1].dx.powi(2) + cluster[1].dy.powi(2)).sqrt();
        assert!((radius - 18.0).abs() < 1e-9);
        assert!(cluster[1].dx < 0.0, "second label sits at 120 degrees");
    }
}
