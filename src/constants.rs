//! Central constants for the open-pr application

/// Environment variables holding the GitHub token
pub mod env {
    /// Checked first
    pub const PRODUCT_TOKEN: &str = "PRODUCT_GITHUB_TOKEN";

    /// Used when the product token is unset or empty
    pub const FALLBACK_TOKEN: &str = "GITHUB_TOKEN";

    /// Lookup order
    pub const TOKEN_VARS: [&str; 2] = [PRODUCT_TOKEN, FALLBACK_TOKEN];
}

/// Process exit codes for startup failures
///
/// A pull request that could not be created still exits 0; the printed
/// result line carries the failure.
pub mod exit_codes {
    pub const CLIENT_INIT: i32 = 1;
    pub const MISSING_CREDENTIAL: i32 = 2;
}

/// The pull request this tool opens
pub mod pull_request {
    pub const REPOSITORY: &str = "bcolemanau/agent-chat-ui";

    pub const HEAD: &str = "feature/issue-19-hydration-preview-view";

    pub const BASE: &str = "staging";

    pub const TITLE: &str =
        "feat(issue-19): Concept brief and hydration diff views with horizontal layout";

    pub const LABELS: &[&str] = &[];

    pub const BODY: &str = r#"## Issue #19: Concept Brief and Hydration UI Components

This PR adds UI components for Issue #19 concept agent work.

### Features
- **Concept Brief Diff View**: Server-backed diff view for comparing concept options
- **Hydration Diff View**: Diff view component for hydration proposals
- **Unified Approvals System**: Centralized approval/reject/edit UI for all proposal types
- **Horizontal Layout**: Chat panel on right with 25% min, 75% max constraints
- **Supporting Components**: Progress, tabs, and diff renderer utilities

### Layout Improvements
- Converted chat panel from vertical (bottom) to horizontal (right) layout
- Percentage-based sizing (default 40% width)
- 25% minimum and 75% maximum constraints for both panels
- Resizable divider with proper constraints

### Components Added

**New Files:**
- `src/app/workbench/concept-brief/page.tsx` - Concept brief workbench page
- `src/components/workbench/concept-brief-diff-view.tsx` - Concept brief option comparison
- `src/app/workbench/hydration/page.tsx` - Hydration workbench page
- `src/components/workbench/hydration-diff-view.tsx` - Hydration proposal diff view
- `src/app/workbench/decisions/page.tsx` - Unified decisions page
- `src/components/workbench/approval-card.tsx` - Approval/reject/edit card component
- `src/components/workbench/hooks/use-unified-approvals.ts` - Unified approvals hook
- `src/components/workbench/hooks/use-approval-count.ts` - Approval count hook
- `src/lib/diff-types.ts` - Standardized diff interface types
- `src/components/workbench/__tests__/hydration-diff-view.test.tsx` - Tests
- `src/components/workbench/diff-renderers/` - Diff rendering utilities
- `src/components/ui/progress.tsx` - Progress UI component
- `src/components/ui/tabs.tsx` - Tabs UI component
- `jest.config.cjs` - Testing configuration

**Modified Files:**
- `src/components/workbench/shell.tsx` - Horizontal layout with percentage-based sizing

### Related
- Issue #19: Concept agent implementation
- Part of Issue #19 Phase 1: Template-Driven Agent Foundation"#;
}
