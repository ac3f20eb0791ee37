use crate::control::{BypassSwitch, Param};

/// Context passed to graph nodes during rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
}

impl RenderCtx {
    pub fn new(sample_rate: f32) -> Self {
        Self { sample_rate }
    }
}

/// Core trait for audio processing graph nodes.
///
/// Sources overwrite `out`; processors read `out` and transform it in place.
/// Implementations must not allocate or block.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }
}

/// The handles a section exposes to the control side.
pub trait SectionControls {
    /// Section name, also the prefix of its parameter names.
    fn section(&self) -> &'static str;

    fn params(&self) -> Vec<&Param>;

    fn bypass(&self) -> &BypassSwitch;
}

/// `"<section>.<param>"`, the name every section parameter is registered under.
pub(crate) fn param_name(section: &str, param: &str) -> String {
    format!("{section}.{param}")
}
