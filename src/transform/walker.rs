use super::copy::CopyRewriter;
use crate::catalog::DatasetResolver;
use crate::error::TransformWarning;
use crate::pipeline::{Activity, JsonMap};
use std::mem;

/// Depth-first walk over the activity tree, rebuilding it with every Copy
/// node rewritten in place.
///
/// Container activities nest children at type-dependent paths: ForEach and
/// Until at `typeProperties.activities`, IfCondition at its two branch
/// arrays, Switch under every case plus the default branch. The walk
/// recurses into all of them with no depth limit; a Copy four containers
/// deep transforms exactly like one at the top level.
pub(super) struct TreeWalker<'a> {
    resolver: DatasetResolver<'a>,
    global_parameters: &'a JsonMap,
    pipeline_name: &'a str,
    warnings: Vec<TransformWarning>,
}

impl<'a> TreeWalker<'a> {
    pub(super) fn new(
        resolver: DatasetResolver<'a>,
        global_parameters: &'a JsonMap,
        pipeline_name: &'a str,
    ) -> Self {
        Self {
            resolver,
            global_parameters,
            pipeline_name,
            warnings: Vec::new(),
        }
    }

    pub(super) fn transform_activities(&mut self, activities: Vec<Activity>) -> Vec<Activity> {
        activities
            .into_iter()
            .map(|activity| self.transform_activity(activity))
            .collect()
    }

    fn transform_activity(&mut self, activity: Activity) -> Activity {
        match activity {
            Activity::Copy(copy) => {
                let rewriter = CopyRewriter::new(
                    &mut self.resolver,
                    self.global_parameters,
                    self.pipeline_name,
                    &mut self.warnings,
                );
                Activity::Copy(rewriter.rewrite(copy))
            }
            Activity::ForEach(mut stage) => {
                let children = mem::take(&mut stage.type_properties.activities);
                stage.type_properties.activities = self.transform_activities(children);
                Activity::ForEach(stage)
            }
            Activity::Until(mut stage) => {
                let children = mem::take(&mut stage.type_properties.activities);
                stage.type_properties.activities = self.transform_activities(children);
                Activity::Until(stage)
            }
            Activity::IfCondition(mut stage) => {
                let if_true = mem::take(&mut stage.type_properties.if_true_activities);
                let if_false = mem::take(&mut stage.type_properties.if_false_activities);
                stage.type_properties.if_true_activities = self.transform_activities(if_true);
                stage.type_properties.if_false_activities = self.transform_activities(if_false);
                Activity::IfCondition(stage)
            }
            Activity::Switch(mut stage) => {
                let cases = mem::take(&mut stage.type_properties.cases);
                stage.type_properties.cases = cases
                    .into_iter()
                    .map(|mut case| {
                        let children = mem::take(&mut case.activities);
                        case.activities = self.transform_activities(children);
                        case
                    })
                    .collect();
                let default = mem::take(&mut stage.type_properties.default_activities);
                stage.type_properties.default_activities = self.transform_activities(default);
                Activity::Switch(stage)
            }
            // Every other activity type is outside this transform's concern.
            Activity::Passthrough(value) => Activity::Passthrough(value),
        }
    }

    pub(super) fn into_warnings(self) -> Vec<TransformWarning> {
        self.warnings
    }
}
