//! Primary tracer seam.
//!
//! A host may have a higher-fidelity tracer available. The built-in
//! pipeline only runs when no tracer is given or the tracer fails.

use crate::bitmap::PixelBuffer;
use crate::config::VectorizeConfig;
use crate::document::VectorDocument;
use crate::error::VectorizeError;

/// An external tracer that turns pixels into a finished SVG document.
pub trait PrimaryTracer {
    fn trace_svg(&self, buffer: &PixelBuffer) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// Which path produced the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// SVG text returned by the primary tracer, passed through untouched.
    ///
    /// No normalization is applied: forcing `width`/`height`/`viewBox`,
    /// stripping stroke and opacity attributes, and merging similar fills
    /// are left to the host.
    Traced(String),
    /// Document built by the built-in pipeline.
    Fallback(VectorDocument),
}

/// Try the primary tracer first, falling back to the built-in pipeline.
///
/// A successful tracer result is returned verbatim as [`Conversion::Traced`];
/// `config` only applies to the fallback.
pub fn convert_with_fallback(
    tracer: Option<&dyn PrimaryTracer>,
    buffer: &PixelBuffer,
    config: &VectorizeConfig,
) -> Result<Conversion, VectorizeError> {
    if let Some(tracer) = tracer {
        match tracer.trace_svg(buffer) {
            Ok(svg) => return Ok(Conversion::Traced(svg)),
            Err(e) => log::warn!("primary tracer failed, using fallback: {e}"),
        }
    }
    crate::vectorize_buffer(buffer, config).map(Conversion::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl PrimaryTracer for Fixed {
        fn trace_svg(&self, _: &PixelBuffer) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            self.0.map(str::to_string).ok_or_else(|| "unavailable".into())
        }
    }

    fn white_2x2() -> Vec<u8> {
        vec![255; 16]
    }

    #[test]
    fn tracer_output_wins() {
        let data = white_2x2();
        let buf = PixelBuffer::new(&data, 2, 2).unwrap();
        let tracer = Fixed(Some("<svg/>"));
        let out = convert_with_fallback(Some(&tracer as &dyn PrimaryTracer), &buf, &VectorizeConfig::default()).unwrap();
        assert_eq!(out, Conversion::Traced("<svg/>".to_string()));
    }

    #[test]
    fn traced_svg_is_not_normalized() {
        let data = white_2x2();
        let buf = PixelBuffer::new(&data, 2, 2).unwrap();
        let raw = r##"<svg width="9"><path d="M0 0" stroke="#000" opacity="0.5" fill="rgb(1, 2, 3)"/></svg>"##;
        let tracer = Fixed(Some(raw));
        let config = VectorizeConfig { merge_tolerance: 50.0, ..VectorizeConfig::default() };
        let out = convert_with_fallback(Some(&tracer as &dyn PrimaryTracer), &buf, &config).unwrap();
        assert_eq!(out, Conversion::Traced(raw.to_string()));
    }

    #[test]
    fn failing_tracer_falls_back() {
        let data = white_2x2();
        let buf = PixelBuffer::new(&data, 2, 2).unwrap();
        let tracer = Fixed(None);
        let out = convert_with_fallback(Some(&tracer as &dyn PrimaryTracer), &buf, &VectorizeConfig::default()).unwrap();
        assert_eq!(out, Conversion::Fallback(VectorDocument::new(2, 2)));
        let out = convert_with_fallback(None, &buf, &VectorizeConfig::default()).unwrap();
        assert!(matches!(out, Conversion::Fallback(doc) if doc.is_empty()));
    }
}
