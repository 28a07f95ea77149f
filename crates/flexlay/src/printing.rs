use std::fmt;

use crate::{ElementId, Flexlay};

impl fmt::Debug for Flexlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FLEXLAY")?;

        fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        fn fmt_element(
            engine: &Flexlay,
            id: ElementId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            let Some(el) = engine.element(id) else {
                return Ok(());
            };
            write_indent(f, depth)?;
            let rect = engine.element_rect(id);
            writeln!(
                f,
                "#{} {:?} proportion={} border={} spacing={} -> {}x{} at ({}, {})",
                id.0,
                el.axis,
                el.proportion,
                el.border,
                el.spacing,
                rect.width,
                rect.height,
                rect.x,
                rect.y,
            )?;
            for child in &el.children {
                fmt_element(engine, *child, f, depth + 1)?;
            }
            Ok(())
        }

        for root in self.roots() {
            fmt_element(self, root, f, 0)?;
        }
        Ok(())
    }
}
