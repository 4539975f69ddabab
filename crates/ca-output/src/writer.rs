//! The `PlanWriter` trait implemented by all backend writers.

use ca_dashboard::Refresh;

use crate::OutputResult;

/// Trait implemented by the text and CSV plan writers.
pub trait PlanWriter {
    /// Write the plan for one refresh.  A refresh with no nearest shelters
    /// writes nothing.
    fn write_plan(&mut self, refresh: &Refresh) -> OutputResult<()>;

    /// Flush all underlying handles.  Called at the end of every run, so
    /// it may run many times; each call flushes.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write to both writers; the first error wins.
impl<A: PlanWriter, B: PlanWriter> PlanWriter for (A, B) {
    fn write_plan(&mut self, refresh: &Refresh) -> OutputResult<()> {
        self.0.write_plan(refresh)?;
        self.1.write_plan(refresh)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}
