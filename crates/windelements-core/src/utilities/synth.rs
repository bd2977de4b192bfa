//! Built-in utility sources, used when the bundled files cannot be found

use crate::language::Language;

const CN_TS: &str = r#"export type ClassValue = string | undefined | null | false | Record<string, boolean>;

export function cn(...inputs: ClassValue[]): string {
  const classes: string[] = [];
  for (const input of inputs) {
    if (!input) continue;
    if (typeof input === 'string') {
      classes.push(input);
    } else {
      for (const [key, value] of Object.entries(input)) {
        if (value) classes.push(key);
      }
    }
  }
  return classes.join(' ');
}

export function generateId(prefix: string = 'we'): string {
  return `${prefix}-${Math.random().toString(36).substring(2, 11)}`;
}
"#;

const CN_JS: &str = r#"export function cn(...inputs) {
  const classes = [];
  for (const input of inputs) {
    if (!input) continue;
    if (typeof input === 'string') {
      classes.push(input);
    } else if (typeof input === 'object') {
      for (const [key, value] of Object.entries(input)) {
        if (value) classes.push(key);
      }
    }
  }
  return classes.join(' ');
}

export function generateId(prefix = 'we') {
  return `${prefix}-${Math.random().toString(36).substring(2, 11)}`;
}
"#;

const FOCUS_TRAP_TS: &str = r#"
const FOCUSABLE =
  'a[href], button:not([disabled]), textarea:not([disabled]), input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex="-1"])';

export class FocusTrap {
  private element: HTMLElement;
  private previousFocus: HTMLElement | null = null;
  private isActive = false;

  constructor(element: HTMLElement) {
    this.element = element;
  }

  activate(): void {
    if (this.isActive) return;
    this.previousFocus = document.activeElement as HTMLElement | null;
    this.isActive = true;

    const focusable = this.getFocusableElements();
    if (focusable.length > 0) focusable[0].focus();

    this.element.addEventListener('keydown', this.handleKeyDown);
  }

  deactivate(): void {
    if (!this.isActive) return;
    this.isActive = false;
    this.element.removeEventListener('keydown', this.handleKeyDown);
    this.previousFocus?.focus();
  }

  private handleKeyDown = (e: KeyboardEvent): void => {
    if (e.key !== 'Tab') return;

    const focusable = this.getFocusableElements();
    if (focusable.length === 0) return;

    const first = focusable[0];
    const last = focusable[focusable.length - 1];

    if (e.shiftKey && document.activeElement === first) {
      last.focus();
      e.preventDefault();
    } else if (!e.shiftKey && document.activeElement === last) {
      first.focus();
      e.preventDefault();
    }
  };

  private getFocusableElements(): HTMLElement[] {
    return Array.from(this.element.querySelectorAll<HTMLElement>(FOCUSABLE));
  }
}
"#;

const FOCUS_TRAP_JS: &str = r#"
const FOCUSABLE =
  'a[href], button:not([disabled]), textarea:not([disabled]), input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex="-1"])';

export class FocusTrap {
  constructor(element) {
    this.element = element;
    this.previousFocus = null;
    this.isActive = false;
    this.handleKeyDown = this.handleKeyDown.bind(this);
  }

  activate() {
    if (this.isActive) return;
    this.previousFocus = document.activeElement;
    this.isActive = true;

    const focusable = this.getFocusableElements();
    if (focusable.length > 0) focusable[0].focus();

    this.element.addEventListener('keydown', this.handleKeyDown);
  }

  deactivate() {
    if (!this.isActive) return;
    this.isActive = false;
    this.element.removeEventListener('keydown', this.handleKeyDown);
    if (this.previousFocus) this.previousFocus.focus();
  }

  handleKeyDown(e) {
    if (e.key !== 'Tab') return;

    const focusable = this.getFocusableElements();
    if (focusable.length === 0) return;

    const first = focusable[0];
    const last = focusable[focusable.length - 1];

    if (e.shiftKey && document.activeElement === first) {
      last.focus();
      e.preventDefault();
    } else if (!e.shiftKey && document.activeElement === last) {
      first.focus();
      e.preventDefault();
    }
  }

  getFocusableElements() {
    return Array.from(this.element.querySelectorAll(FOCUSABLE));
  }
}
"#;

const PORTAL_TS: &str = r#"
const mounts = new Map<string, HTMLElement>();

export class Portal {
  private container: HTMLElement;

  constructor(id: string = 'windelements-portal') {
    let container = mounts.get(id) ?? document.getElementById(id);
    if (!container) {
      container = document.createElement('div');
      container.id = id;
      document.body.appendChild(container);
    }
    mounts.set(id, container);
    this.container = container;
  }

  append(element: HTMLElement): void {
    this.container.appendChild(element);
  }

  remove(element: HTMLElement): void {
    if (this.container.contains(element)) {
      this.container.removeChild(element);
    }
  }

  static teardown(id: string = 'windelements-portal'): void {
    mounts.get(id)?.remove();
    mounts.delete(id);
  }
}
"#;

const PORTAL_JS: &str = r#"
const mounts = new Map();

export class Portal {
  constructor(id = 'windelements-portal') {
    let container = mounts.get(id) || document.getElementById(id);
    if (!container) {
      container = document.createElement('div');
      container.id = id;
      document.body.appendChild(container);
    }
    mounts.set(id, container);
    this.container = container;
  }

  append(element) {
    this.container.appendChild(element);
  }

  remove(element) {
    if (this.container.contains(element)) {
      this.container.removeChild(element);
    }
  }

  static teardown(id = 'windelements-portal') {
    const container = mounts.get(id);
    if (container) container.remove();
    mounts.delete(id);
  }
}
"#;

const TYPES_TS: &str = r#"export type Size = 'sm' | 'md' | 'lg';
export type Variant = 'default' | 'primary' | 'secondary' | 'destructive' | 'outline' | 'ghost' | 'link';

export interface BaseComponentProps {
  className?: string;
  id?: string;
}
"#;

/// Synthesized `utils.{ext}` source for `language`
pub fn utils_template(language: Language) -> String {
    let parts: [&str; 3] = match language {
        Language::TypeScript => [CN_TS, FOCUS_TRAP_TS, PORTAL_TS],
        Language::JavaScript => [CN_JS, FOCUS_TRAP_JS, PORTAL_JS],
    };
    parts.concat()
}

/// Synthesized `types.ts` source
pub fn types_template() -> &'static str {
    TYPES_TS
}
