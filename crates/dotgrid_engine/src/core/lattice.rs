//! Unveränderliches Punktraster mit stabilen Indizes.
//!
//! Positionen liegen in der Bodenebene (Welt-x, Welt-z). Als `Vec2` gespeichert
//! steht `y` für die Welt-z-Achse.

use glam::Vec2;

use super::GridError;

/// Einzelner adressierbarer Rasterpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// Dichter Index 0..N-1 in Erzeugungsreihenfolge
    pub index: u32,
    /// Position in der Bodenebene (x, z)
    pub position: Vec2,
}

/// Regelmäßiges Raster aus (2·half_width+1)·(2·half_height+1) Punkten.
#[derive(Debug, Clone)]
pub struct Lattice {
    points: Vec<LatticePoint>,
    half_width: u32,
    half_height: u32,
    spacing: f32,
}

impl Lattice {
    /// Erzeugt das Raster: x äußere Schleife, z innere Schleife, jeweils aufsteigend.
    pub fn generate(half_width: u32, half_height: u32, spacing: f32) -> Result<Self, GridError> {
        GridError::check_positive("spacing", spacing)?;

        let columns = 2 * u64::from(half_width) + 1;
        let rows = 2 * u64::from(half_height) + 1;
        let count = columns * rows;
        if count > u64::from(u32::MAX) {
            return Err(GridError::TooManyPoints { count });
        }

        let hw = i64::from(half_width);
        let hh = i64::from(half_height);
        let mut points = Vec::with_capacity(count as usize);
        for x in -hw..=hw {
            for z in -hh..=hh {
                points.push(LatticePoint {
                    index: points.len() as u32,
                    position: Vec2::new(x as f32 * spacing, z as f32 * spacing),
                });
            }
        }

        log::debug!(
            "Raster erzeugt: {}x{} Punkte, Abstand {}",
            columns,
            rows,
            spacing
        );

        Ok(Self {
            points,
            half_width,
            half_height,
            spacing,
        })
    }

    /// Anzahl der Rasterpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn das Raster keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Abstand benachbarter Punkte in Welteinheiten.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Halbe Breite in Punkten (ohne Mittelspalte).
    pub fn half_width(&self) -> u32 {
        self.half_width
    }

    /// Halbe Höhe in Punkten (ohne Mittelzeile).
    pub fn half_height(&self) -> u32 {
        self.half_height
    }

    /// Alle Punkte in Indexreihenfolge.
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// Position eines Punktes oder `None` bei unbekanntem Index.
    pub fn position(&self, index: u32) -> Option<Vec2> {
        self.points.get(index as usize).map(|p| p.position)
    }

    /// Index des Punktes an Rasterkoordinate (Spalte, Zeile) relativ zur Mitte.
    pub fn index_of(&self, column: i32, row: i32) -> Option<u32> {
        let hw = self.half_width as i64;
        let hh = self.half_height as i64;
        let (c, r) = (column as i64, row as i64);
        if c.abs() > hw || r.abs() > hh {
            return None;
        }
        let rows = 2 * hh + 1;
        Some(((c + hw) * rows + (r + hh)) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_expected_count_and_order() {
        let lattice = Lattice::generate(2, 1, 1.0).expect("gültiges Raster");

        assert_eq!(lattice.len(), 5 * 3);
        let first: Vec<Vec2> = lattice.points()[..4].iter().map(|p| p.position).collect();
        assert_eq!(
            first,
            vec![
                Vec2::new(-2.0, -1.0),
                Vec2::new(-2.0, 0.0),
                Vec2::new(-2.0, 1.0),
                Vec2::new(-1.0, -1.0),
            ]
        );
        assert!(
            lattice
                .points()
                .iter()
                .enumerate()
                .all(|(i, p)| p.index as usize == i)
        );
    }

    #[test]
    fn spacing_scales_positions() {
        let lattice = Lattice::generate(1, 1, 0.5).expect("gültiges Raster");
        assert_eq!(lattice.position(0), Some(Vec2::new(-0.5, -0.5)));
        assert_eq!(lattice.position(8), Some(Vec2::new(0.5, 0.5)));
        assert_eq!(lattice.position(9), None);
    }

    #[test]
    fn index_of_matches_generation_order() {
        let lattice = Lattice::generate(30, 15, 1.0).expect("gültiges Raster");
        assert_eq!(lattice.len(), 61 * 31);

        let idx = lattice.index_of(3, -4).expect("innerhalb");
        assert_eq!(lattice.position(idx), Some(Vec2::new(3.0, -4.0)));
        assert_eq!(lattice.index_of(31, 0), None);
    }

    #[test]
    fn rejects_non_positive_spacing() {
        assert!(matches!(
            Lattice::generate(1, 1, 0.0),
            Err(GridError::InvalidConfig { what: "spacing", .. })
        ));
    }
}
