//! Numbers behind the performance views. Drawing lives in `ui::performance`.

use crate::curriculum::Curriculum;
use crate::progress::ScoreBook;
use crate::scoring::Tier;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Scores in curriculum order.
pub fn bar_series(curriculum: &Curriculum, book: &ScoreBook) -> Vec<(String, u8)> {
    curriculum
        .subjects
        .iter()
        .map(|s| (s.name.clone(), book.get(&s.name).score))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub percent: f64,
    /// Radians, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        let angle = normalize(angle - self.start_angle);
        angle < self.end_angle - self.start_angle
    }
}

/// Every subject gets at least weight 1, so an untouched subject still shows.
/// Slices start at 12 o'clock and run counter-clockwise.
pub fn pie_slices(curriculum: &Curriculum, book: &ScoreBook) -> Vec<PieSlice> {
    let weights: Vec<(String, f64)> = bar_series(curriculum, book)
        .into_iter()
        .map(|(label, score)| (label, f64::from(score.max(1))))
        .collect();
    let total: f64 = weights.iter().map(|(_, w)| w).sum();

    let mut start = FRAC_PI_2;
    weights
        .into_iter()
        .map(|(label, weight)| {
            let fraction = weight / total;
            let end = start + fraction * TAU;
            let slice = PieSlice {
                label,
                percent: fraction * 100.0,
                start_angle: start,
                end_angle: end,
            };
            start = end;
            slice
        })
        .collect()
}

fn normalize(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub name: String,
    pub score: u8,
    pub tier: Tier,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<(usize, usize)>,
}

/// Nodes sit evenly on the unit circle, the first one on top.
pub fn knowledge_graph(curriculum: &Curriculum, book: &ScoreBook) -> KnowledgeGraph {
    let count = curriculum.subjects.len().max(1) as f64;
    let nodes = curriculum
        .subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let angle = FRAC_PI_2 - TAU * i as f64 / count;
            let score = book.get(&subject.name).score;
            GraphNode {
                name: subject.name.clone(),
                score,
                tier: Tier::from_score(score),
                x: angle.cos(),
                y: angle.sin(),
            }
        })
        .collect();

    KnowledgeGraph {
        nodes,
        edges: curriculum.edge_indices(),
    }
}

pub fn recommendations(curriculum: &Curriculum, book: &ScoreBook) -> Vec<(String, &'static str)> {
    curriculum
        .subjects
        .iter()
        .map(|s| {
            let tier = book.get(&s.name).tier();
            (s.name.clone(), tier.recommendation())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Curriculum, ScoreBook) {
        let curriculum = Curriculum::embedded().unwrap();
        let book = ScoreBook::fresh(curriculum.subject_names());
        (curriculum, book)
    }

    #[test]
    fn test_bar_series_follows_curriculum_order() {
        let (curriculum, mut book) = setup();
        book.record_attempt("ADBMS", 100);
        let series = bar_series(&curriculum, &book);
        assert_eq!(
            series,
            vec![
                ("AI Tools".to_string(), 0),
                ("ADBMS".to_string(), 50),
                ("Python Programming".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_pie_zero_scores_split_evenly() {
        let (curriculum, book) = setup();
        let slices = pie_slices(&curriculum, &book);
        assert_eq!(slices.len(), 3);
        for slice in &slices {
            assert!((slice.percent - 100.0 / 3.0).abs() < 1e-9);
        }
        assert!((slices[0].start_angle - FRAC_PI_2).abs() < 1e-9);
        assert!((slices[2].end_angle - (FRAC_PI_2 + TAU)).abs() < 1e-9);
    }

    #[test]
    fn test_pie_percentages_sum_to_100() {
        let (curriculum, mut book) = setup();
        book.record_attempt("AI Tools", 100);
        book.record_attempt("Python Programming", 67);
        let slices = pie_slices(&curriculum, &book);
        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        // 50 : 1 : 33
        assert!((slices[0].percent - 50.0 / 84.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slice_contains_its_mid_angle() {
        let (curriculum, mut book) = setup();
        book.record_attempt("AI Tools", 100);
        let slices = pie_slices(&curriculum, &book);
        for (i, slice) in slices.iter().enumerate() {
            for (j, other) in slices.iter().enumerate() {
                assert_eq!(other.contains(slice.mid_angle()), i == j);
            }
        }
    }

    #[test]
    fn test_pie_sweep_hits_exactly_one_slice() {
        let (curriculum, mut book) = setup();
        book.record_attempt("ADBMS", 100);
        book.record_attempt("Python Programming", 33);
        let slices = pie_slices(&curriculum, &book);

        let mut hits = vec![0usize; slices.len()];
        let mut angle = 0.0;
        while angle < TAU {
            let owners: Vec<usize> = (0..slices.len())
                .filter(|&i| slices[i].contains(angle))
                .collect();
            assert_eq!(owners.len(), 1, "angle {angle}");
            hits[owners[0]] += 1;
            angle += 0.01;
        }
        // ADBMS carries 50 of 67 weight.
        assert!(hits[1] > hits[0] + hits[2]);
    }

    #[test]
    fn test_knowledge_graph_is_triangle() {
        let (curriculum, mut book) = setup();
        book.record_attempt("AI Tools", 100);
        book.record_attempt("AI Tools", 100);
        book.record_attempt("ADBMS", 100);

        let graph = knowledge_graph(&curriculum, &book);
        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 3);

        let top = &graph.nodes[0];
        assert!(top.x.abs() < 1e-9 && (top.y - 1.0).abs() < 1e-9);
        assert_eq!(top.score, 75);
        assert_eq!(top.tier, Tier::Good);
        assert_eq!(graph.nodes[1].tier, Tier::Good);
        assert_eq!(graph.nodes[2].tier, Tier::NeedsImprovement);

        for node in &graph.nodes {
            assert!(((node.x * node.x + node.y * node.y) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_recommendations_per_subject() {
        let (curriculum, mut book) = setup();
        for _ in 0..3 {
            book.record_attempt("AI Tools", 100);
        }
        let recs = recommendations(&curriculum, &book);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].0, "AI Tools");
        assert_eq!(recs[0].1, Tier::Excellent.recommendation());
        assert_eq!(recs[1].1, Tier::NeedsImprovement.recommendation());
    }
}
