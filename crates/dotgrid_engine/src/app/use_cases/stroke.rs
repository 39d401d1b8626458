//! Use-Case: Malen und Radieren über den Spatial-Index.

use glam::Vec2;

use crate::app::SessionState;
use crate::shared::VisualChange;

/// Abtastpunkte entlang der Strecke `from → to` mit Abstand ≤ `step`.
///
/// Beide Endpunkte sind enthalten. Der Aufrufer begrenzt die Strecke vorher,
/// die Anzahl wächst linear mit der Länge.
pub fn sweep_samples(from: Vec2, to: Vec2, step: f32) -> impl Iterator<Item = Vec2> {
    let distance = from.distance(to);
    let steps = if step > 0.0 && distance.is_finite() {
        (distance / step).ceil().max(1.0) as u32
    } else {
        1
    };
    (0..=steps).map(move |i| from.lerp(to, i as f32 / steps as f32))
}

/// Beschneidet die Strecke `a → b` auf das Rechteck `[min, max]` (Liang-Barsky).
///
/// `None`, wenn die Strecke das Rechteck nicht berührt. Ein- und Austrittspunkt
/// werden direkt auf der geschnittenen Kante berechnet, damit weit entfernte
/// Endpunkte nicht an f32-Auslöschung scheitern.
pub fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let d = b - a;
    let mut enter = (0.0_f32, None);
    let mut exit = (1.0_f32, None);

    for (p, q, edge) in [
        (-d.x, a.x - min.x, Edge::X(min.x)),
        (d.x, max.x - a.x, Edge::X(max.x)),
        (-d.y, a.y - min.y, Edge::Y(min.y)),
        (d.y, max.y - a.y, Edge::Y(max.y)),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > exit.0 {
                return None;
            }
            if r > enter.0 {
                enter = (r, Some(edge));
            }
        } else {
            if r < enter.0 {
                return None;
            }
            if r < exit.0 {
                exit = (r, Some(edge));
            }
        }
    }

    let point_on = |(t, edge): (f32, Option<Edge>)| {
        let point = match edge {
            None if t == 0.0 => a,
            None => b,
            Some(Edge::X(x)) => Vec2::new(x, a.y + (x - a.x) * (d.y / d.x)),
            Some(Edge::Y(y)) => Vec2::new(a.x + (y - a.y) * (d.x / d.y), y),
        };
        point.clamp(min, max)
    };
    Some((point_on(enter), point_on(exit)))
}

/// Rechteckkante, an der eine Strecke ein- oder austritt.
#[derive(Debug, Clone, Copy)]
enum Edge {
    X(f32),
    Y(f32),
}

/// Abstand eines Punktes zur Strecke `a → b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Malt alle Punkte, denen der Strich seit dem Vorframe nahekommt.
///
/// Ohne Vorframe-Position (erster Frame eines Drucks) wird nur der nächste
/// Punkt an `cursor` gemalt. Mit Vorframe-Position wird jeder Punkt gemalt,
/// dessen Abstand zur Strecke `previous → cursor` höchstens `paint_threshold`
/// beträgt. Gibt die Anzahl neu gemalter Punkte zurück.
pub fn paint_stroke(state: &mut SessionState, cursor: Vec2) -> usize {
    let index = state.spatial_index.clone();
    let threshold = state.options.paint_threshold;

    let segment = state
        .previous_cursor
        .filter(|previous| (cursor - *previous).is_finite());
    let Some(previous) = segment else {
        return match index.nearest(cursor, threshold) {
            Some(hit) => usize::from(paint_point(state, hit.index)),
            None => 0,
        };
    };

    // Nur der Teil der Strecke, der dem Raster nahekommt, wird abgetastet
    let lattice = &state.lattice;
    let extent = Vec2::new(lattice.half_width() as f32, lattice.half_height() as f32)
        * lattice.spacing()
        + Vec2::splat(threshold);
    let Some((from, to)) = clip_segment(previous, cursor, -extent, extent) else {
        return 0;
    };

    let step = state.options.sweep_step;
    let query_radius = threshold + step * 0.5;
    let mut candidates: Vec<u32> = Vec::new();
    for sample in sweep_samples(from, to, step) {
        for hit in index.within_radius(sample, query_radius) {
            if candidates.contains(&hit) {
                continue;
            }
            let Some(position) = index.position(hit) else {
                continue;
            };
            if distance_to_segment(position, from, to) <= threshold {
                candidates.push(hit);
            }
        }
    }

    let mut painted = 0;
    for hit in candidates {
        if paint_point(state, hit) {
            painted += 1;
        }
    }
    painted
}

fn paint_point(state: &mut SessionState, index: u32) -> bool {
    if state.selection.contains(index) {
        return false;
    }
    state.selection.ids_mut().insert(index);
    state.push_visual(VisualChange::Painted(index));
    true
}

/// Führt den Strichanker nach: nur solange eine Taste gehalten ist.
///
/// Ohne gehaltene Taste wird der Anker verworfen, damit ein neuer Druck nicht
/// über die Lücke hinweg interpoliert.
pub fn update_stroke_anchor(state: &mut SessionState, cursor: Vec2) {
    state.previous_cursor = if state.pointer.any_held() {
        Some(cursor)
    } else {
        None
    };
}

/// Radiert alle gemalten Punkte im Radier-Radius um `cursor`.
///
/// Nicht gemalte Punkte im Radius bleiben unberührt. Gibt die Anzahl
/// radierter Punkte zurück.
pub fn erase_around(state: &mut SessionState, cursor: Vec2) -> usize {
    let nearby = state
        .spatial_index
        .within_radius(cursor, state.options.erase_threshold);

    let mut erased = 0;
    for index in nearby {
        if !state.selection.contains(index) {
            continue;
        }
        state.selection.ids_mut().swap_remove(&index);
        state.push_visual(VisualChange::Erased(index));
        erased += 1;
    }
    erased
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::GateOptions;
    use approx::assert_relative_eq;

    fn session() -> SessionState {
        SessionState::new(GateOptions::default()).expect("Standard-Optionen sind gültig")
    }

    #[test]
    fn sweep_samples_respect_step_and_include_both_ends() {
        let samples: Vec<Vec2> =
            sweep_samples(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0.25).collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], Vec2::ZERO);
        assert_relative_eq!(samples[1].x, 0.25);
        assert_eq!(*samples.last().expect("nicht leer"), Vec2::new(1.0, 0.0));

        let still: Vec<Vec2> = sweep_samples(Vec2::ONE, Vec2::ONE, 0.25).collect();
        assert_eq!(still, vec![Vec2::ONE, Vec2::ONE]);
    }

    #[test]
    fn clip_segment_cuts_to_rectangle() {
        let min = Vec2::new(-2.0, -1.0);
        let max = Vec2::new(2.0, 1.0);

        let (a, b) = clip_segment(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0), min, max)
            .expect("Strecke kreuzt das Rechteck");
        assert_relative_eq!(a.x, -2.0);
        assert_relative_eq!(b.x, 2.0);

        let inside = clip_segment(Vec2::ZERO, Vec2::ONE * 0.5, min, max);
        assert_eq!(inside, Some((Vec2::ZERO, Vec2::ONE * 0.5)));

        assert!(clip_segment(Vec2::new(-10.0, 5.0), Vec2::new(10.0, 5.0), min, max).is_none());

        let (a, b) = clip_segment(Vec2::new(-1.0e30, 0.5), Vec2::new(1.0e30, 0.5), min, max)
            .expect("Strecke kreuzt das Rechteck");
        assert_eq!(a, Vec2::new(-2.0, 0.5));
        assert_eq!(b, Vec2::new(2.0, 0.5));
    }

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, 0.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(2.0, 0.49), a, b), 0.49);
        assert_relative_eq!(distance_to_segment(Vec2::new(7.0, 4.0), a, b), 5.0);
        assert_relative_eq!(distance_to_segment(Vec2::new(1.0, 1.0), a, a), 2.0_f32.sqrt());
    }

    #[test]
    fn sweep_between_samples_paints_points_near_the_line() {
        let mut state = session();
        state.previous_cursor = Some(Vec2::new(-5.125, 0.49));

        assert_eq!(paint_stroke(&mut state, Vec2::new(4.875, 0.49)), 10);
        for column in -5..=4 {
            let index = state.lattice.index_of(column, 0).expect("innerhalb");
            assert!(state.selection.contains(index), "Spalte {column} fehlt");
        }
        // 0,51 von der Linie entfernt
        let above = state.lattice.index_of(0, 1).expect("innerhalb");
        assert!(!state.selection.contains(above));
        // Endpunkt (4,875; 0,49) liegt knapp außerhalb der Reichweite
        let beyond = state.lattice.index_of(5, 0).expect("innerhalb");
        assert!(!state.selection.contains(beyond));
    }

    #[test]
    fn huge_cursor_jump_is_clipped_to_the_lattice() {
        let mut state = session();
        state.previous_cursor = Some(Vec2::ZERO);

        assert_eq!(paint_stroke(&mut state, Vec2::new(1.0e30, 0.0)), 31);
        let edge = state.lattice.index_of(30, 0).expect("innerhalb");
        assert!(state.selection.contains(edge));

        let mut state = session();
        state.previous_cursor = Some(Vec2::new(-1.0e30, 100.0));
        assert_eq!(paint_stroke(&mut state, Vec2::new(1.0e30, 100.0)), 0);
    }

    #[test]
    fn non_finite_jump_falls_back_to_cursor_query() {
        let mut state = session();
        state.previous_cursor = Some(Vec2::new(-f32::MAX, 0.0));

        assert_eq!(paint_stroke(&mut state, Vec2::new(f32::MAX, 0.0)), 0);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn first_press_paints_only_at_cursor() {
        let mut state = session();
        assert_eq!(paint_stroke(&mut state, Vec2::new(2.1, -0.9)), 1);

        let index = state.lattice.index_of(2, -1).expect("innerhalb");
        assert!(state.selection.contains(index));
        assert_eq!(state.take_visual_changes(), vec![VisualChange::Painted(index)]);
    }

    #[test]
    fn painting_far_from_any_point_is_a_no_op() {
        let mut state = session();
        assert_eq!(paint_stroke(&mut state, Vec2::new(100.0, 100.0)), 0);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn painting_twice_does_not_duplicate() {
        let mut state = session();
        paint_stroke(&mut state, Vec2::ZERO);
        assert_eq!(paint_stroke(&mut state, Vec2::new(0.1, 0.1)), 0);
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn erase_removes_only_painted_points_in_radius() {
        let mut state = session();
        paint_stroke(&mut state, Vec2::new(0.0, 0.0));
        paint_stroke(&mut state, Vec2::new(5.0, 0.0));
        state.take_visual_changes();

        assert_eq!(erase_around(&mut state, Vec2::new(0.5, 0.5)), 1);
        assert_eq!(state.selection.len(), 1);
        let remaining = state.lattice.index_of(5, 0).expect("innerhalb");
        assert!(state.selection.contains(remaining));

        // Erneutes Radieren an gleicher Stelle ändert nichts
        assert_eq!(erase_around(&mut state, Vec2::new(0.5, 0.5)), 0);
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn anchor_is_cleared_without_held_button() {
        let mut state = session();
        state.pointer.secondary_held = true;
        update_stroke_anchor(&mut state, Vec2::ONE);
        assert_eq!(state.previous_cursor, Some(Vec2::ONE));

        state.pointer.secondary_held = false;
        update_stroke_anchor(&mut state, Vec2::ZERO);
        assert_eq!(state.previous_cursor, None);
    }
}
