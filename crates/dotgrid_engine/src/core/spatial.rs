//! Spatial-Index (Hash-Grid) für Proximity-Abfragen über dem Punktraster.
//!
//! Punkte werden beim Aufbau einmalig in Zellen fester Größe einsortiert und
//! danach nie verschoben. Abfragen sammeln Kandidaten aus dem Zellfenster
//! um die Query-Zelle und filtern exakt über die quadrierte Distanz.

use std::collections::HashMap;

use glam::Vec2;

use super::{GridError, LatticePoint};

/// Zellschlüssel `(floor(x / cell_size), floor(z / cell_size))`.
pub type CellKey = (i32, i32);

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des gefundenen Rasterpunkts
    pub index: u32,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Debug-Statistik über die Zellbelegung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialStats {
    /// Anzahl indexierter Punkte
    pub total_points: usize,
    /// Anzahl belegter Zellen
    pub total_cells: usize,
    /// Durchschnittliche Punkte pro belegter Zelle
    pub avg_points_per_cell: f32,
    /// Minimum über alle belegten Zellen
    pub min_points_in_cell: usize,
    /// Maximum über alle belegten Zellen
    pub max_points_in_cell: usize,
}

/// Read-only Spatial-Index über einer festen Punktmenge.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size: f32,
    cells: HashMap<CellKey, Vec<u32>>,
    positions: Vec<Vec2>,
    point_count: usize,
    /// Belegter Zellbereich (min, max); begrenzt das Abfragefenster
    occupied: Option<(CellKey, CellKey)>,
}

impl SpatialIndex {
    /// Baut den Index; jeder Punkt landet in genau einer Zelle.
    ///
    /// Die Reihenfolge innerhalb einer Zelle entspricht der Eingabereihenfolge.
    pub fn build(points: &[LatticePoint], cell_size: f32) -> Result<Self, GridError> {
        GridError::check_positive("cell_size", cell_size)?;

        let capacity = points
            .iter()
            .map(|p| p.index as usize + 1)
            .max()
            .unwrap_or(0);
        // Lücken bleiben NaN und fallen bei jedem Distanzvergleich heraus
        let mut positions = vec![Vec2::NAN; capacity];
        let mut seen = vec![false; capacity];
        let mut cells: HashMap<CellKey, Vec<u32>> = HashMap::new();
        let mut occupied: Option<(CellKey, CellKey)> = None;

        for point in points {
            let slot = point.index as usize;
            if seen[slot] {
                return Err(GridError::DuplicateIndex { index: point.index });
            }
            seen[slot] = true;
            positions[slot] = point.position;

            let key = cell_key(point.position, cell_size);
            cells.entry(key).or_default().push(point.index);
            occupied = Some(match occupied {
                None => (key, key),
                Some((min, max)) => (
                    (min.0.min(key.0), min.1.min(key.1)),
                    (max.0.max(key.0), max.1.max(key.1)),
                ),
            });
        }

        Ok(Self {
            cell_size,
            cells,
            positions,
            point_count: points.len(),
            occupied,
        })
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.point_count
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    /// Zellgröße, mit der der Index aufgebaut wurde.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Position eines indexierten Punktes (O(1)).
    pub fn position(&self, index: u32) -> Option<Vec2> {
        self.positions
            .get(index as usize)
            .copied()
            .filter(|p| !p.is_nan())
    }

    /// Findet den nächsten Punkt mit Distanz ≤ `max_radius`.
    ///
    /// Bei gleicher Distanz gewinnt der erste Kandidat in Scan-Reihenfolge
    /// (Zell-x aufsteigend, dann Zell-z aufsteigend, dann Einfügereihenfolge).
    /// Dieser Tie-Break ist deterministisch, aber geometrisch bedeutungslos.
    pub fn nearest(&self, query: Vec2, max_radius: f32) -> Option<SpatialMatch> {
        if !query.is_finite() || max_radius.is_nan() || max_radius < 0.0 {
            return None;
        }

        let radius_sq = max_radius * max_radius;
        let mut best: Option<(u32, f32)> = None;
        self.for_each_candidate(query, max_radius, |index, dist_sq| {
            if dist_sq <= radius_sq && best.is_none_or(|(_, best_sq)| dist_sq < best_sq) {
                best = Some((index, dist_sq));
            }
        });

        best.map(|(index, dist_sq)| SpatialMatch {
            index,
            distance: dist_sq.sqrt(),
        })
    }

    /// Findet alle Punkte mit Distanz ≤ `radius`, auch über Zellgrenzen hinweg.
    ///
    /// Die Ergebnisreihenfolge ist die Scan-Reihenfolge; semantisch ist das
    /// Ergebnis eine Menge.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<u32> {
        if !query.is_finite() || radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }

        let radius_sq = radius * radius;
        let mut results = Vec::new();
        self.for_each_candidate(query, radius, |index, dist_sq| {
            if dist_sq <= radius_sq {
                results.push(index);
            }
        });
        results
    }

    /// Statistik über die Zellbelegung (Debug-Ausgabe).
    pub fn stats(&self) -> SpatialStats {
        let counts = self.cells.values().map(Vec::len);
        let total_cells = self.cells.len();
        SpatialStats {
            total_points: self.point_count,
            total_cells,
            avg_points_per_cell: if total_cells == 0 {
                0.0
            } else {
                self.point_count as f32 / total_cells as f32
            },
            min_points_in_cell: counts.clone().min().unwrap_or(0),
            max_points_in_cell: counts.max().unwrap_or(0),
        }
    }

    /// Ruft `visit(index, dist_sq)` für jeden Kandidaten im Zellfenster auf.
    ///
    /// Fensterradius in Zellen: `ceil(radius / cell_size)` (Chebyshev), auf
    /// den belegten Bereich beschnitten. Das Beschneiden ändert weder Menge
    /// noch Reihenfolge der Kandidaten.
    fn for_each_candidate(&self, query: Vec2, radius: f32, mut visit: impl FnMut(u32, f32)) {
        let Some((min, max)) = self.occupied else {
            return;
        };

        let (center_x, center_z) = cell_key(query, self.cell_size);
        let cell_radius = (radius / self.cell_size).ceil().min(i32::MAX as f32) as i32;

        let x_from = center_x.saturating_sub(cell_radius).max(min.0);
        let x_to = center_x.saturating_add(cell_radius).min(max.0);
        let z_from = center_z.saturating_sub(cell_radius).max(min.1);
        let z_to = center_z.saturating_add(cell_radius).min(max.1);

        for gx in x_from..=x_to {
            for gz in z_from..=z_to {
                let Some(indices) = self.cells.get(&(gx, gz)) else {
                    continue;
                };
                for &index in indices {
                    let pos = self.positions[index as usize];
                    visit(index, pos.distance_squared(query));
                }
            }
        }
    }
}

/// Zellschlüssel einer Weltposition.
fn cell_key(position: Vec2, cell_size: f32) -> CellKey {
    (
        (position.x / cell_size).floor() as i32,
        (position.y / cell_size).floor() as i32,
    )
}
