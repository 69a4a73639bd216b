//! Global variable sets consulted for names that no scope declares.

use jetlint_core::collections::FxHashSet;

/// A selectable group of globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalGroup {
    /// ECMAScript builtins, always wanted.
    Default,
    Browser,
    Node,
    WebWorker,
    Jasmine,
    Jest,
}

impl GlobalGroup {
    pub fn from_name(name: &str) -> Option<GlobalGroup> {
        Some(match name {
            "ecmascript" | "default" => GlobalGroup::Default,
            "browser" => GlobalGroup::Browser,
            "node.js" | "node" => GlobalGroup::Node,
            "web-worker" => GlobalGroup::WebWorker,
            "jasmine" => GlobalGroup::Jasmine,
            "jest" => GlobalGroup::Jest,
            _ => return None,
        })
    }

    fn names(self) -> &'static [&'static str] {
        match self {
            GlobalGroup::Default => ECMASCRIPT_GLOBALS,
            GlobalGroup::Browser => BROWSER_GLOBALS,
            GlobalGroup::Node => NODE_GLOBALS,
            GlobalGroup::WebWorker => WEB_WORKER_GLOBALS,
            GlobalGroup::Jasmine => JASMINE_GLOBALS,
            GlobalGroup::Jest => JEST_GLOBALS,
        }
    }
}

static ECMASCRIPT_GLOBALS: &[&str] = &[
    "AggregateError",
    "Array",
    "ArrayBuffer",
    "Atomics",
    "BigInt",
    "BigInt64Array",
    "BigUint64Array",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "EvalError",
    "FinalizationRegistry",
    "Float32Array",
    "Float64Array",
    "Function",
    "Infinity",
    "Int16Array",
    "Int32Array",
    "Int8Array",
    "Intl",
    "JSON",
    "Map",
    "Math",
    "NaN",
    "Number",
    "Object",
    "Promise",
    "Proxy",
    "RangeError",
    "ReferenceError",
    "Reflect",
    "RegExp",
    "Set",
    "SharedArrayBuffer",
    "String",
    "Symbol",
    "SyntaxError",
    "TypeError",
    "URIError",
    "Uint16Array",
    "Uint32Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "WeakMap",
    "WeakRef",
    "WeakSet",
    "console",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "escape",
    "eval",
    "globalThis",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    "undefined",
    "unescape",
];

static BROWSER_GLOBALS: &[&str] = &[
    "AbortController",
    "AbortSignal",
    "Blob",
    "CustomEvent",
    "DOMException",
    "Document",
    "Element",
    "Event",
    "EventTarget",
    "File",
    "FileReader",
    "FormData",
    "HTMLElement",
    "Headers",
    "Image",
    "IntersectionObserver",
    "MutationObserver",
    "Node",
    "Request",
    "ResizeObserver",
    "Response",
    "TextDecoder",
    "TextEncoder",
    "URL",
    "URLSearchParams",
    "WebSocket",
    "Worker",
    "XMLHttpRequest",
    "addEventListener",
    "alert",
    "atob",
    "btoa",
    "cancelAnimationFrame",
    "clearInterval",
    "clearTimeout",
    "confirm",
    "crypto",
    "customElements",
    "devicePixelRatio",
    "document",
    "fetch",
    "getComputedStyle",
    "history",
    "indexedDB",
    "localStorage",
    "location",
    "matchMedia",
    "navigator",
    "performance",
    "prompt",
    "queueMicrotask",
    "removeEventListener",
    "requestAnimationFrame",
    "requestIdleCallback",
    "screen",
    "sessionStorage",
    "setInterval",
    "setTimeout",
    "structuredClone",
    "window",
];

static NODE_GLOBALS: &[&str] = &[
    "AbortController",
    "AbortSignal",
    "Buffer",
    "TextDecoder",
    "TextEncoder",
    "URL",
    "URLSearchParams",
    "__dirname",
    "__filename",
    "clearImmediate",
    "clearInterval",
    "clearTimeout",
    "exports",
    "fetch",
    "global",
    "module",
    "process",
    "queueMicrotask",
    "require",
    "setImmediate",
    "setInterval",
    "setTimeout",
    "structuredClone",
];

static WEB_WORKER_GLOBALS: &[&str] = &[
    "WorkerGlobalScope",
    "caches",
    "clearInterval",
    "clearTimeout",
    "close",
    "fetch",
    "importScripts",
    "location",
    "navigator",
    "onmessage",
    "postMessage",
    "queueMicrotask",
    "self",
    "setInterval",
    "setTimeout",
];

static JASMINE_GLOBALS: &[&str] = &[
    "afterAll",
    "afterEach",
    "beforeAll",
    "beforeEach",
    "describe",
    "expect",
    "expectAsync",
    "fail",
    "fdescribe",
    "fit",
    "it",
    "jasmine",
    "pending",
    "spyOn",
    "spyOnAllFunctions",
    "spyOnProperty",
    "xdescribe",
    "xit",
];

static JEST_GLOBALS: &[&str] = &[
    "afterAll",
    "afterEach",
    "beforeAll",
    "beforeEach",
    "describe",
    "expect",
    "fdescribe",
    "fit",
    "it",
    "jest",
    "test",
    "xdescribe",
    "xit",
    "xtest",
];

/// The set of names that resolve when no scope declares them.
#[derive(Debug, Clone)]
pub struct GlobalDeclaredVariableSet {
    names: FxHashSet<&'static str>,
}

impl GlobalDeclaredVariableSet {
    /// An empty set; every global use will be reported.
    pub fn new() -> Self {
        Self {
            names: FxHashSet::default(),
        }
    }

    /// The ECMAScript builtins.
    pub fn default_globals() -> Self {
        let mut set = Self::new();
        set.add_group(GlobalGroup::Default);
        set
    }

    pub fn add_group(&mut self, group: GlobalGroup) {
        self.names.extend(group.names().iter().copied());
    }

    /// Add a group by its user-facing name; false if unknown.
    pub fn add_group_by_name(&mut self, name: &str) -> bool {
        match GlobalGroup::from_name(name) {
            Some(group) => {
                self.add_group(group);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for GlobalDeclaredVariableSet {
    fn default() -> Self {
        Self::default_globals()
    }
}
