//! Which copied template receives which placeholders.
//!
//! This is fixed policy and must stay byte-for-byte compatible with existing
//! generated projects. Templates not listed here are copied verbatim.

use crate::domain::{
    ambient::Ambient,
    catalog::TemplateKind,
    descriptor::ProjectDescriptor,
    placeholder::{Placeholder, TokenMap},
};

/// The rewrites to apply to one copied template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub template: TemplateKind,
    pub tokens: TokenMap,
}

/// Build the full rewrite plan for a run, in application order.
pub fn plan(descriptor: &ProjectDescriptor, ambient: &Ambient) -> Vec<Substitution> {
    let name = descriptor.name();
    let owner = descriptor.owner();

    let rewrite = |template, tokens| Substitution { template, tokens };

    vec![
        rewrite(
            TemplateKind::Analyser,
            TokenMap::new().with(Placeholder::Package, name),
        ),
        rewrite(
            TemplateKind::Authors,
            TokenMap::new()
                .with(Placeholder::Username, owner.display_name())
                .with(Placeholder::Email, owner.email()),
        ),
        rewrite(
            TemplateKind::License,
            TokenMap::new()
                .with(Placeholder::Year, ambient.year().to_string())
                .with(Placeholder::Username, owner.display_name()),
        ),
        rewrite(
            TemplateKind::Changelog,
            TokenMap::new().with(Placeholder::Date, ambient.changelog_date()),
        ),
        rewrite(
            TemplateKind::Manifest,
            TokenMap::new().with(Placeholder::Package, name),
        ),
        rewrite(
            TemplateKind::Pypirc,
            TokenMap::new().with(Placeholder::Username, owner.index_username()),
        ),
        rewrite(
            TemplateKind::Setup,
            TokenMap::new().with(Placeholder::Package, name),
        ),
        rewrite(
            TemplateKind::Runtime,
            TokenMap::new().with(Placeholder::Version, ambient.runtime_version()),
        ),
        rewrite(
            TemplateKind::Procfile,
            TokenMap::new().with(Placeholder::Package, name),
        ),
        rewrite(
            TemplateKind::Pytest,
            TokenMap::new().with(Placeholder::Package, name),
        ),
        rewrite(
            TemplateKind::Readme,
            TokenMap::new()
                .with(Placeholder::Package, name)
                .with(Placeholder::Username, owner.display_name())
                .with(Placeholder::Email, owner.email()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::descriptor::Identity;

    fn plan_for_bomber() -> Vec<Substitution> {
        let descriptor = ProjectDescriptor::new(
            "bomber",
            Identity::new("Ada Lovelace", "ada@example.com").unwrap(),
        )
        .unwrap();
        let ambient = Ambient::new(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), "3.11.4");
        plan(&descriptor, &ambient)
    }

    fn tokens_for(kind: TemplateKind) -> TokenMap {
        plan_for_bomber()
            .into_iter()
            .find(|s| s.template == kind)
            .map(|s| s.tokens)
            .unwrap_or_default()
    }

    #[test]
    fn each_template_appears_once() {
        let plan = plan_for_bomber();
        let kinds: HashSet<_> = plan.iter().map(|s| s.template).collect();
        assert_eq!(kinds.len(), plan.len());
    }

    #[test]
    fn binary_templates_are_never_rewritten() {
        assert!(plan_for_bomber().iter().all(|s| !s.template.is_binary()));
    }

    #[test]
    fn readme_gets_package_username_email() {
        let tokens = tokens_for(TemplateKind::Readme);
        assert_eq!(tokens.get(Placeholder::Package), Some("bomber"));
        assert_eq!(tokens.get(Placeholder::Username), Some("Ada Lovelace"));
        assert_eq!(tokens.get(Placeholder::Email), Some("ada@example.com"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn license_gets_year_and_username() {
        let tokens = tokens_for(TemplateKind::License);
        assert_eq!(tokens.get(Placeholder::Year), Some("2026"));
        assert_eq!(tokens.get(Placeholder::Username), Some("Ada Lovelace"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn pypirc_gets_index_username() {
        let tokens = tokens_for(TemplateKind::Pypirc);
        assert_eq!(tokens.get(Placeholder::Username), Some("ada.lovelace"));
    }

    #[test]
    fn changelog_and_runtime_get_ambient_values() {
        assert_eq!(tokens_for(TemplateKind::Changelog).get(Placeholder::Date), Some("02.01.2026"));
        assert_eq!(tokens_for(TemplateKind::Runtime).get(Placeholder::Version), Some("3.11.4"));
    }

    #[test]
    fn verbatim_templates_have_no_rewrites() {
        for kind in [TemplateKind::Flake, TemplateKind::Gitignore, TemplateKind::Requirements] {
            assert!(tokens_for(kind).is_empty(), "{kind} should be verbatim");
        }
    }
}
