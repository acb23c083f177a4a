//! Per-class bindings.
//!
//! Each module declares the class marker, its record and the verbs the server
//! accepts for it. Reach them through the accessors on [`Session`].

pub mod bond;
pub mod console;
pub mod event;
pub mod gpu_group;
pub mod host;
pub mod host_crashdump;
pub mod host_metrics;
pub mod message;
pub mod network;
pub mod observer;
pub mod pbd;
pub mod pci;
pub mod pgpu;
pub mod pif;
pub mod pif_metrics;
pub mod pool;
pub mod pusb;
pub mod secret;
pub mod session;
pub mod sm;
pub mod sr;
pub mod subject;
pub mod task;
pub mod tunnel;
pub mod usb_group;
pub mod user;
pub mod vbd;
pub mod vbd_metrics;
pub mod vdi;
pub mod vgpu;
pub mod vgpu_type;
pub mod vif;
pub mod vif_metrics;
pub mod vm;
pub mod vm_guest_metrics;
pub mod vm_metrics;
pub mod vusb;

pub use bond::{Bond, BondRecord};
pub use console::{Console, ConsoleRecord};
pub use event::{Event, EventBatch, EventRecord};
pub use gpu_group::{GpuGroup, GpuGroupRecord};
pub use host::{Host, HostRecord};
pub use host_crashdump::{HostCrashdump, HostCrashdumpRecord};
pub use host_metrics::{HostMetrics, HostMetricsRecord};
pub use message::{Message, MessageRecord};
pub use network::{Network, NetworkRecord};
pub use observer::{Observer, ObserverRecord};
pub use pbd::{Pbd, PbdRecord};
pub use pci::{Pci, PciRecord};
pub use pgpu::{Pgpu, PgpuRecord};
pub use pif::{Pif, PifRecord};
pub use pif_metrics::{PifMetrics, PifMetricsRecord};
pub use pool::{Pool, PoolRecord};
pub use pusb::{Pusb, PusbRecord};
pub use secret::{Secret, SecretRecord};
pub use session::{SessionClass, SessionRecord};
pub use sm::{Sm, SmRecord};
pub use sr::{Sr, SrRecord};
pub use subject::{Subject, SubjectRecord};
pub use task::{Task, TaskRecord};
pub use tunnel::{Tunnel, TunnelRecord};
pub use usb_group::{UsbGroup, UsbGroupRecord};
pub use user::{User, UserRecord};
pub use vbd::{Vbd, VbdRecord};
pub use vbd_metrics::{VbdMetrics, VbdMetricsRecord};
pub use vdi::{Vdi, VdiRecord};
pub use vgpu::{Vgpu, VgpuRecord};
pub use vgpu_type::{VgpuType, VgpuTypeRecord};
pub use vif::{Vif, VifRecord};
pub use vif_metrics::{VifMetrics, VifMetricsRecord};
pub use vm::{Vm, VmRecord};
pub use vm_guest_metrics::{VmGuestMetrics, VmGuestMetricsRecord};
pub use vm_metrics::{VmMetrics, VmMetricsRecord};
pub use vusb::{Vusb, VusbRecord};

use crate::class::ClassApi;
use crate::session::Session;

impl Session {
    /// Session records
    #[must_use]
    pub fn sessions(&self) -> ClassApi<'_, SessionClass> {
        ClassApi::new(self)
    }

    /// `pool` instances.
    #[must_use]
    pub fn pool(&self) -> ClassApi<'_, Pool> {
        ClassApi::new(self)
    }

    /// `host` instances.
    #[must_use]
    pub fn host(&self) -> ClassApi<'_, Host> {
        ClassApi::new(self)
    }

    /// `VM` instances.
    #[must_use]
    pub fn vm(&self) -> ClassApi<'_, Vm> {
        ClassApi::new(self)
    }

    /// `VBD` instances.
    #[must_use]
    pub fn vbd(&self) -> ClassApi<'_, Vbd> {
        ClassApi::new(self)
    }

    /// `VBD_metrics` instances.
    #[must_use]
    pub fn vbd_metrics(&self) -> ClassApi<'_, VbdMetrics> {
        ClassApi::new(self)
    }

    /// `VDI` instances.
    #[must_use]
    pub fn vdi(&self) -> ClassApi<'_, Vdi> {
        ClassApi::new(self)
    }

    /// `SR` instances.
    #[must_use]
    pub fn sr(&self) -> ClassApi<'_, Sr> {
        ClassApi::new(self)
    }

    /// `network` instances.
    #[must_use]
    pub fn network(&self) -> ClassApi<'_, Network> {
        ClassApi::new(self)
    }

    /// `PIF` instances.
    #[must_use]
    pub fn pif(&self) -> ClassApi<'_, Pif> {
        ClassApi::new(self)
    }

    /// `PIF_metrics` instances.
    #[must_use]
    pub fn pif_metrics(&self) -> ClassApi<'_, PifMetrics> {
        ClassApi::new(self)
    }

    /// `VIF` instances.
    #[must_use]
    pub fn vif(&self) -> ClassApi<'_, Vif> {
        ClassApi::new(self)
    }

    /// `VIF_metrics` instances.
    #[must_use]
    pub fn vif_metrics(&self) -> ClassApi<'_, VifMetrics> {
        ClassApi::new(self)
    }

    /// `Bond` instances.
    #[must_use]
    pub fn bond(&self) -> ClassApi<'_, Bond> {
        ClassApi::new(self)
    }

    /// `tunnel` instances.
    #[must_use]
    pub fn tunnel(&self) -> ClassApi<'_, Tunnel> {
        ClassApi::new(self)
    }

    /// `GPU_group` instances.
    #[must_use]
    pub fn gpu_group(&self) -> ClassApi<'_, GpuGroup> {
        ClassApi::new(self)
    }

    /// `PGPU` instances.
    #[must_use]
    pub fn pgpu(&self) -> ClassApi<'_, Pgpu> {
        ClassApi::new(self)
    }

    /// `VGPU` instances.
    #[must_use]
    pub fn vgpu(&self) -> ClassApi<'_, Vgpu> {
        ClassApi::new(self)
    }

    /// `VGPU_type` instances.
    #[must_use]
    pub fn vgpu_type(&self) -> ClassApi<'_, VgpuType> {
        ClassApi::new(self)
    }

    /// `PCI` instances.
    #[must_use]
    pub fn pci(&self) -> ClassApi<'_, Pci> {
        ClassApi::new(self)
    }

    /// `PUSB` instances.
    #[must_use]
    pub fn pusb(&self) -> ClassApi<'_, Pusb> {
        ClassApi::new(self)
    }

    /// `USB_group` instances.
    #[must_use]
    pub fn usb_group(&self) -> ClassApi<'_, UsbGroup> {
        ClassApi::new(self)
    }

    /// `VUSB` instances.
    #[must_use]
    pub fn vusb(&self) -> ClassApi<'_, Vusb> {
        ClassApi::new(self)
    }

    /// `SM` instances.
    #[must_use]
    pub fn sm(&self) -> ClassApi<'_, Sm> {
        ClassApi::new(self)
    }

    /// `Observer` instances.
    #[must_use]
    pub fn observer(&self) -> ClassApi<'_, Observer> {
        ClassApi::new(self)
    }

    /// `secret` instances.
    #[must_use]
    pub fn secret(&self) -> ClassApi<'_, Secret> {
        ClassApi::new(self)
    }

    /// `subject` instances.
    #[must_use]
    pub fn subject(&self) -> ClassApi<'_, Subject> {
        ClassApi::new(self)
    }

    /// `user` instances.
    #[must_use]
    pub fn user(&self) -> ClassApi<'_, User> {
        ClassApi::new(self)
    }

    /// `host_crashdump` instances.
    #[must_use]
    pub fn host_crashdump(&self) -> ClassApi<'_, HostCrashdump> {
        ClassApi::new(self)
    }

    /// `task` instances.
    #[must_use]
    pub fn task(&self) -> ClassApi<'_, Task> {
        ClassApi::new(self)
    }

    /// Event registration and delivery.
    #[must_use]
    pub fn event(&self) -> ClassApi<'_, Event> {
        ClassApi::new(self)
    }

    /// `PBD` instances.
    #[must_use]
    pub fn pbd(&self) -> ClassApi<'_, Pbd> {
        ClassApi::new(self)
    }

    /// `VM_metrics` instances.
    #[must_use]
    pub fn vm_metrics(&self) -> ClassApi<'_, VmMetrics> {
        ClassApi::new(self)
    }

    /// `VM_guest_metrics` instances.
    #[must_use]
    pub fn vm_guest_metrics(&self) -> ClassApi<'_, VmGuestMetrics> {
        ClassApi::new(self)
    }

    /// `host_metrics` instances.
    #[must_use]
    pub fn host_metrics(&self) -> ClassApi<'_, HostMetrics> {
        ClassApi::new(self)
    }

    /// `message` instances.
    #[must_use]
    pub fn message(&self) -> ClassApi<'_, Message> {
        ClassApi::new(self)
    }

    /// `console` instances.
    #[must_use]
    pub fn console(&self) -> ClassApi<'_, Console> {
        ClassApi::new(self)
    }
}
