//! Compound widgets

pub mod avatar;
pub mod collapsible;
pub mod disclosure;
pub mod drawer;
pub mod input_otp;
pub mod interactive;
pub mod select;
pub mod spinner;
pub mod switch;
pub mod tabs;

pub use avatar::{short_name, Avatar, AvatarFallback, AvatarScope, AvatarSize};
pub use collapsible::{
    Collapsible, CollapsibleBuilder, CollapsibleContent, CollapsibleScope, CollapsibleTrigger,
    PanelController, PanelEvent, PanelFrame, PanelPhase,
};
pub use disclosure::Disclosure;
pub use drawer::{BackdropOptions, Drawer, DrawerContent, DrawerScope, SheetHandle, SheetOptions};
pub use input_otp::{
    Alphabet, FocusTarget, InputOtp, InputOtpBuilder, InputOtpScope, InputOtpSlot, SlotDisplay,
    SlotState,
};
pub use interactive::{Interactive, KeyboardDismiss};
pub use select::{Select, SelectBuilder, SelectItem, SelectScope};
pub use spinner::{DotsSpinner, Pulse, Skeleton, Spinner, SpinnerStyle};
pub use switch::{Switch, SwitchBuilder, SwitchFrame};
pub use tabs::{ContentVisibility, Tabs, TabsBuilder, TabsContent, TabsScope, TabsTrigger};
