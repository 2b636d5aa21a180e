use crate::domain::{PlotArtifact, PlotRequest, PlotResult};

pub trait ModuleExecutor {
    fn execute(&self, request: &PlotRequest) -> PlotResult<Vec<PlotArtifact>>;
}

#[cfg(test)]
mod tests {
    use super::ModuleExecutor;
    use crate::domain::{BandPlotError, BandPlotErrorCategory, PlotArtifact, PlotRequest};

    struct FailingExecutor;

    impl ModuleExecutor for FailingExecutor {
        fn execute(
            &self,
            _request: &PlotRequest,
        ) -> crate::domain::PlotResult<Vec<PlotArtifact>> {
            Err(BandPlotError::computation(
                "RUN.MODULE",
                "module execution failed",
            ))
        }
    }

    #[test]
    fn module_executor_uses_shared_error_types() {
        let request = PlotRequest::in_directory("work");
        let error = FailingExecutor
            .execute(&request)
            .expect_err("executor should fail");
        assert_eq!(error.category(), BandPlotErrorCategory::ComputationError);
        assert_eq!(error.exit_code(), 4);
        assert_eq!(error.code(), "RUN.MODULE");
    }
}
