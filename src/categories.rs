//! Component categories and the static lookup tables behind them.
//!
//! Two tables drive classification: component name -> [`Category`], and
//! [`Category`] -> storybook path fragment. Both are plain data built once
//! and handed to the analyzer by reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Documentation category a component is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Actions,
    DataInput,
    Forms,
    Tables,
    Typography,
    Layouts,
    Navigation,
    DataDisplay,
    Utility,
    Dashboard,
    /// Only present in the storybook table; no component maps here.
    Icons,
}

impl Category {
    /// All categories, in table order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Actions,
            Category::DataInput,
            Category::Forms,
            Category::Tables,
            Category::Typography,
            Category::Layouts,
            Category::Navigation,
            Category::DataDisplay,
            Category::Utility,
            Category::Dashboard,
            Category::Icons,
        ]
    }

    /// The kebab-case tag, also used as the markdown file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Actions => "actions",
            Category::DataInput => "data-input",
            Category::Forms => "forms",
            Category::Tables => "tables",
            Category::Typography => "typography",
            Category::Layouts => "layouts",
            Category::Navigation => "navigation",
            Category::DataDisplay => "data-display",
            Category::Utility => "utility",
            Category::Dashboard => "dashboard",
            Category::Icons => "icons",
        }
    }

    /// Human-readable title: hyphens become spaces, each word title-cased.
    ///
    /// ```
    /// use compdoc::Category;
    ///
    /// assert_eq!(Category::DataInput.title(), "Data Input");
    /// ```
    pub fn title(&self) -> String {
        title_case(&self.as_str().replace('-', " "))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Fragment used when a category has no storybook entry.
pub const DEFAULT_STORYBOOK_PATH: &str = "/Components?id=";

const COMPONENT_CATEGORIES: &[(&str, Category)] = &[
    ("Button", Category::Actions),
    ("ButtonGroup", Category::Actions),
    ("Dropdown", Category::Actions),
    ("RightClickProvider", Category::Actions),
    ("Input", Category::DataInput),
    ("TextInput", Category::DataInput),
    ("InputNumber", Category::DataInput),
    ("InputPassword", Category::DataInput),
    ("InputAddon", Category::DataInput),
    ("Select", Category::DataInput),
    ("MultiSelect", Category::DataInput),
    ("MultiSelectInput", Category::DataInput),
    ("MultiSelectDropdown", Category::DataInput),
    ("SelectDropdown", Category::DataInput),
    ("Checkbox", Category::DataInput),
    ("Radio", Category::DataInput),
    ("RadioGroup", Category::DataInput),
    ("Slider", Category::DataInput),
    ("TextArea", Category::DataInput),
    ("DatePicker", Category::DataInput),
    ("DatePickerMini", Category::DataInput),
    ("TimePicker", Category::DataInput),
    ("FileInput", Category::DataInput),
    ("CodeInput", Category::DataInput),
    ("MultiInput", Category::DataInput),
    ("Favorite", Category::DataInput),
    ("Sorter", Category::DataInput),
    ("Form", Category::Forms),
    ("FormItemInput", Category::Forms),
    ("FormItemSelect", Category::Forms),
    ("FormItemTextArea", Category::Forms),
    ("FormItemDatePicker", Category::Forms),
    ("FormItemTimePicker", Category::Forms),
    ("FormItemCodeInput", Category::Forms),
    ("FormItemInputPassword", Category::Forms),
    ("FormSection", Category::Forms),
    ("FormLayout", Category::Forms),
    ("Table", Category::Tables),
    ("LocalTable", Category::Tables),
    ("WidgetTable", Category::Tables),
    ("Title", Category::Typography),
    ("Paragraph", Category::Typography),
    ("Link", Category::Typography),
    ("TextLabel", Category::Typography),
    ("FlexLayout", Category::Layouts),
    ("FlexItem", Category::Layouts),
    ("StackingLayout", Category::Layouts),
    ("ContainerLayout", Category::Layouts),
    ("Modal", Category::Layouts),
    ("ModalContent", Category::Layouts),
    ("ModalWrap", Category::Layouts),
    ("ModalHeader", Category::Layouts),
    ("ConfirmModal", Category::Layouts),
    ("FullPageModal", Category::Layouts),
    ("SidePanel", Category::Layouts),
    ("Overlay", Category::Layouts),
    ("Accordion", Category::Layouts),
    ("Divider", Category::Layouts),
    ("Separator", Category::Layouts),
    ("VerticalSeparator", Category::Layouts),
    ("HeaderFooterLayout", Category::Layouts),
    ("LeftNavLayout", Category::Layouts),
    ("MainPageLayout", Category::Layouts),
    ("AlertLayout", Category::Layouts),
    ("TextGroup", Category::Layouts),
    ("Popover", Category::Layouts),
    ("PopoverContent", Category::Layouts),
    ("OldPopover", Category::Layouts),
    ("Tabs", Category::Navigation),
    ("TabItem", Category::Navigation),
    ("Menu", Category::Navigation),
    ("MenuItem", Category::Navigation),
    ("MenuGroup", Category::Navigation),
    ("MenuController", Category::Navigation),
    ("Breadcrumb", Category::Navigation),
    ("BreadcrumbItem", Category::Navigation),
    ("Steps", Category::Navigation),
    ("StepItem", Category::Navigation),
    ("Pagination", Category::Navigation),
    ("Anchor", Category::Navigation),
    ("AnchorLink", Category::Navigation),
    ("ViewSwitcher", Category::Navigation),
    ("NavBarLayout", Category::Navigation),
    ("SiteMap", Category::Navigation),
    ("SkipLink", Category::Navigation),
    ("SkipLinkContainer", Category::Navigation),
    ("Alert", Category::DataDisplay),
    ("Badge", Category::DataDisplay),
    ("StatusIcon", Category::DataDisplay),
    ("Tooltip", Category::DataDisplay),
    ("OldTooltip", Category::DataDisplay),
    ("Progress", Category::DataDisplay),
    ("Loader", Category::DataDisplay),
    ("Calendar", Category::DataDisplay),
    ("Carousel", Category::DataDisplay),
    ("OrderedList", Category::DataDisplay),
    ("UnorderedList", Category::DataDisplay),
    ("FocusTrap", Category::Utility),
    ("PortalProvider", Category::Utility),
    ("Truncate", Category::Utility),
    ("SrOnly", Category::Utility),
    ("InfiniteScroll", Category::Utility),
    ("Notification", Category::Utility),
    ("NotificationItem", Category::Utility),
    ("NotificationTrigger", Category::Utility),
    ("FileUploadProvider", Category::Utility),
    ("FormItemProvider", Category::Utility),
    ("InputWidthProvider", Category::Utility),
    ("PopupProvider", Category::Utility),
    ("TransitionLayoutProvider", Category::Utility),
    ("Tutorial", Category::Utility),
    ("TutorialManager", Category::Utility),
    ("TutorialMouse", Category::Utility),
    ("TutorialTip", Category::Utility),
    ("TreeView", Category::Utility),
    ("TreeItemCheckbox", Category::Utility),
    ("Scrollbar", Category::Utility),
    ("Dashboard", Category::Dashboard),
    ("DashboardWidgetHeader", Category::Dashboard),
    ("DashboardWidgetLayout", Category::Dashboard),
];

const STORYBOOK_PATHS: &[(Category, &str)] = &[
    (Category::Actions, "/Components/Actions?id="),
    (Category::DataInput, "/Components/Data%20Input?id="),
    (Category::Forms, "/Components/Form?id="),
    (Category::Tables, "/Components/Table?id="),
    (Category::Typography, "/Components/Typography?id="),
    (Category::Layouts, "/Layouts/Structure?id="),
    (Category::Navigation, "/Layouts/Navigation?id="),
    (Category::DataDisplay, "/Components/Data%20Display?id="),
    (Category::Utility, "/Higher-Order%20Components?id="),
    (Category::Dashboard, "/Layouts/Dashboard?id="),
    (Category::Icons, "/Icons/Overview"),
];

/// Lookup tables mapping component names to categories and categories to
/// storybook path fragments.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    components: HashMap<String, Category>,
    storybook_paths: HashMap<Category, String>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            components: COMPONENT_CATEGORIES
                .iter()
                .map(|(name, category)| (name.to_string(), *category))
                .collect(),
            storybook_paths: STORYBOOK_PATHS
                .iter()
                .map(|(category, path)| (*category, path.to_string()))
                .collect(),
        }
    }
}

impl CategoryTable {
    /// An empty table: every component is `utility` and every category uses
    /// the default storybook fragment.
    pub fn empty() -> Self {
        Self {
            components: HashMap::new(),
            storybook_paths: HashMap::new(),
        }
    }

    /// Map a component name to a category, replacing any existing entry.
    pub fn with_component(mut self, name: impl Into<String>, category: Category) -> Self {
        self.components.insert(name.into(), category);
        self
    }

    /// Set the storybook fragment for a category.
    pub fn with_storybook_path(mut self, category: Category, path: impl Into<String>) -> Self {
        self.storybook_paths.insert(category, path.into());
        self
    }

    /// Exact-name lookup. Unmapped names fall back to [`Category::Utility`].
    pub fn category_for(&self, component: &str) -> Category {
        self.components
            .get(component)
            .copied()
            .unwrap_or(Category::Utility)
    }

    /// Storybook path fragment for a category, or [`DEFAULT_STORYBOOK_PATH`].
    pub fn storybook_path(&self, category: Category) -> &str {
        self.storybook_paths
            .get(&category)
            .map(String::as_str)
            .unwrap_or(DEFAULT_STORYBOOK_PATH)
    }

    /// Number of mapped component names.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
