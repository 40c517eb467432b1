use crate::config::toml_config::DemoConfig;
use crate::domain::model::{Triangle, TriangleMetrics};
use crate::domain::ports::TriangleStore;
use crate::utils::error::Result;
use std::io::Write;

/// What a demo run computed, for callers that want more than the text report.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub initial_metrics: TriangleMetrics,
    /// State after both rotations, as written to the store.
    pub saved: Triangle,
    pub reloaded: Triangle,
    pub reloaded_metrics: TriangleMetrics,
    /// The reloaded triangle after the same two rotations.
    pub reloaded_final: Triangle,
}

/// Runs metrics, two rotations and a save/load round trip, then repeats the
/// metrics and rotations on the reloaded triangle.
pub struct DemoRunner<S: TriangleStore> {
    config: DemoConfig,
    store: S,
}

impl<S: TriangleStore> DemoRunner<S> {
    pub fn new(config: DemoConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoReport> {
        tracing::info!("Starting triangle demo");

        let mut triangle = self.config.sample_triangle();
        let initial_metrics = triangle.metrics()?;
        write_metrics(out, &initial_metrics)?;
        writeln!(out, "Before rotation:")?;
        writeln!(out, "{:.2}", triangle)?;

        self.apply_rotations(&mut triangle, out)?;

        self.store.save(&triangle)?;
        tracing::info!("Saved rotated triangle");

        let reloaded = self.store.load()?;
        tracing::info!("Reloaded triangle from store");

        writeln!(out)?;
        writeln!(out, "After reading back from JSON:")?;
        let reloaded_metrics = reloaded.metrics()?;
        write_metrics(out, &reloaded_metrics)?;

        let mut reloaded_final = reloaded;
        self.apply_rotations(&mut reloaded_final, out)?;

        tracing::info!("Triangle demo finished");
        Ok(DemoReport {
            initial_metrics,
            saved: triangle,
            reloaded,
            reloaded_metrics,
            reloaded_final,
        })
    }

    fn apply_rotations<W: Write>(&self, triangle: &mut Triangle, out: &mut W) -> Result<()> {
        let first = self.config.rotation.first_degrees;
        let pivot = triangle.a();
        triangle.rotate(first, pivot);
        writeln!(out, "After rotating {} degrees about A:", first)?;
        writeln!(out, "{:.2}", triangle)?;

        let second = self.config.rotation.second_degrees;
        let center = triangle.circum_center();
        triangle.rotate(second, center);
        writeln!(
            out,
            "After rotating {} degrees about the circumcenter {:.2}:",
            second, center
        )?;
        writeln!(out, "{:.2}", triangle)?;

        Ok(())
    }
}

fn write_metrics<W: Write>(out: &mut W, metrics: &TriangleMetrics) -> Result<()> {
    writeln!(out, "Perimeter: {:.2}", metrics.perimeter)?;
    writeln!(out, "Area: {:.2}", metrics.area)?;
    writeln!(out, "Inscribed circle radius: {:.2}", metrics.inscribed_radius)?;
    writeln!(out, "Circumscribed circle radius: {:.2}", metrics.circumscribed_radius)?;
    writeln!(out, "Triangle type: {}", metrics.kind)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Point, TriangleKind};
    use crate::utils::error::TrigonError;
    use std::cell::RefCell;

    /// Keeps the saved triangle in memory.
    #[derive(Default)]
    struct MemoryStore {
        slot: RefCell<Option<Triangle>>,
    }

    impl TriangleStore for MemoryStore {
        fn save(&self, triangle: &Triangle) -> Result<()> {
            *self.slot.borrow_mut() = Some(*triangle);
            Ok(())
        }

        fn load(&self) -> Result<Triangle> {
            let saved = *self.slot.borrow();
            saved.ok_or_else(|| TrigonError::MalformedDocument {
                field: "$".to_string(),
                reason: "nothing saved".to_string(),
            })
        }
    }

    #[test]
    fn test_default_demo_report() {
        let runner = DemoRunner::new(DemoConfig::default(), MemoryStore::default());
        let mut out = Vec::new();
        let report = runner.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Perimeter: 12.00\nArea: 6.00\n"));
        assert!(text.contains("Inscribed circle radius: 1.00"));
        assert!(text.contains("Circumscribed circle radius: 2.50"));
        assert!(text.contains("Triangle type: right"));
        assert!(text.contains("A: (0.00, 0.00), B: (4.00, 0.00), C: (0.00, 3.00)"));
        assert!(text.contains("After rotating 30 degrees about A:"));
        assert!(text.contains("After reading back from JSON:"));

        assert_eq!(report.reloaded, report.saved);
        assert_eq!(report.reloaded_metrics.kind, TriangleKind::Right);
        assert!((report.reloaded_metrics.area - report.initial_metrics.area).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_sample_fails_before_saving() {
        let mut config = DemoConfig::default();
        config.triangle.c = [8.0, 0.0];
        let store = MemoryStore::default();
        let runner = DemoRunner::new(config, store);

        let result = runner.run(&mut std::io::sink());
        assert!(matches!(result, Err(TrigonError::DegenerateTriangle { .. })));
        assert!(runner.store.slot.borrow().is_none());
    }

    #[test]
    fn test_first_rotation_pivots_on_a() {
        let mut config = DemoConfig::default();
        config.triangle.a = [1.0, 1.0];
        config.triangle.b = [5.0, 1.0];
        config.triangle.c = [1.0, 4.0];
        config.rotation.second_degrees = 0.0;

        let runner = DemoRunner::new(config, MemoryStore::default());
        let report = runner.run(&mut std::io::sink()).unwrap();
        let a = report.saved.a();
        assert!(a.distance(&Point::new(1.0, 1.0)) < 1e-9);
    }
}
