//! Span definitions per operation: artifact load, prediction, rendering.

/// Create an artifact load span.
#[macro_export]
macro_rules! artifact_load_span {
    ($scaler_path:expr, $classifier_path:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::ARTIFACT_LOAD,
            scaler = %$scaler_path,
            classifier = %$classifier_path
        )
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! predict_span {
    ($with_confidence:expr) => {
        tracing::debug_span!(
            $crate::tracing_setup::spans::names::PREDICT,
            with_confidence = $with_confidence
        )
    };
}

/// Create a render span.
#[macro_export]
macro_rules! render_span {
    ($renderer:expr) => {
        tracing::debug_span!($crate::tracing_setup::spans::names::RENDER, renderer = %$renderer)
    };
}

/// Span names used by the macros above.
pub mod names {
    pub const ARTIFACT_LOAD: &str = "fetal.artifact_load";
    pub const PREDICT: &str = "fetal.predict";
    pub const RENDER: &str = "fetal.render";
}

#[cfg(test)]
mod tests {
    #[test]
    fn span_macros_build() {
        let load = artifact_load_span!("models/scaler.json", "models/model.onnx");
        let predict = predict_span!(true);
        let render = render_span!("text");
        let _guard = load.enter();
        drop(predict);
        drop(render);
    }

    #[test]
    fn span_names_are_namespaced() {
        use super::names;
        assert_eq!(names::ARTIFACT_LOAD, "fetal.artifact_load");
        assert_eq!(names::PREDICT, "fetal.predict");
        assert_eq!(names::RENDER, "fetal.render");
    }
}
