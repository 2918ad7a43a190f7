//! Per-feature file templates, grouped by the architecture that emits them.
//!
//! All constants use the `{{PASCAL}}`/`{{SNAKE}}`/`{{CAMEL}}` placeholders
//! filled by [`super::render`].

// ──────────── Clean Architecture ────────────

pub const ENTITY: &str = r##"export interface {{PASCAL}}Entity {
  id: number;
}
"##;

pub const REPOSITORY: &str = r##"import type { {{PASCAL}}Entity } from '../entities/{{SNAKE}}Entity';

export interface I{{PASCAL}}Repository {
  get{{PASCAL}}Data(): Promise<{{PASCAL}}Entity>;
}
"##;

pub const USE_CASE: &str = r##"import type { I{{PASCAL}}Repository } from '../repositories/{{PASCAL}}Repository';
import type { {{PASCAL}}Entity } from '../entities/{{SNAKE}}Entity';

export class Get{{PASCAL}}UseCase {
  constructor(private repository: I{{PASCAL}}Repository) {}

  async execute(): Promise<{{PASCAL}}Entity> {
    return this.repository.get{{PASCAL}}Data();
  }
}
"##;

pub const DATA_MODEL: &str = r##"import type { {{PASCAL}}Entity } from '../../domain/entities/{{SNAKE}}Entity';

export class {{PASCAL}}Model implements {{PASCAL}}Entity {
  id: number;

  constructor(data: { id: number }) {
    this.id = data.id;
  }

  static fromJson(json: Record<string, unknown>): {{PASCAL}}Model {
    return new {{PASCAL}}Model({ id: json['id'] as number });
  }

  toJson(): Record<string, unknown> {
    return { id: this.id };
  }
}
"##;

pub const REMOTE_DATA_SOURCE: &str = r##"import apiClient from '../../../core/api/apiClient';
import { {{PASCAL}}Model } from '../models/{{PASCAL}}Model';

export interface I{{PASCAL}}RemoteDataSource {
  get{{PASCAL}}FromApi(): Promise<{{PASCAL}}Model>;
}

export class {{PASCAL}}RemoteDataSourceImpl implements I{{PASCAL}}RemoteDataSource {
  async get{{PASCAL}}FromApi(): Promise<{{PASCAL}}Model> {
    const response = await apiClient.get('/{{SNAKE}}');
    return {{PASCAL}}Model.fromJson(response.data);
  }
}
"##;

pub const REPOSITORY_IMPL: &str = r##"import type { I{{PASCAL}}Repository } from '../../domain/repositories/{{PASCAL}}Repository';
import type { {{PASCAL}}Entity } from '../../domain/entities/{{SNAKE}}Entity';
import type { I{{PASCAL}}RemoteDataSource } from '../datasources/{{PASCAL}}RemoteDataSource';
import { ServerFailure } from '../../../core/errors/failures';

export class {{PASCAL}}RepositoryImpl implements I{{PASCAL}}Repository {
  constructor(private remoteDataSource: I{{PASCAL}}RemoteDataSource) {}

  async get{{PASCAL}}Data(): Promise<{{PASCAL}}Entity> {
    try {
      return await this.remoteDataSource.get{{PASCAL}}FromApi();
    } catch (error) {
      throw new ServerFailure(String(error));
    }
  }
}
"##;

// ──────────── State management (Clean Architecture presentation layer) ────────────

pub const REDUX_SLICE: &str = r##"import { createSlice, type PayloadAction } from '@reduxjs/toolkit';

export const {{CAMEL}}Slice = createSlice({
  name: '{{CAMEL}}',
  initialState: { data: null, isLoading: false },
  reducers: {
    setData: (state, action: PayloadAction<any>) => { state.data = action.payload; },
  },
});

export const { setData } = {{CAMEL}}Slice.actions;
export default {{CAMEL}}Slice.reducer;
"##;

pub const ZUSTAND_STORE: &str = r##"import { create } from 'zustand';

export const use{{PASCAL}}Store = create<any>((set) => ({
  data: null,
  setData: (data: any) => set({ data }),
}));
"##;

// ──────────── Feature-Based ────────────

pub const TYPES: &str = r##"export interface {{PASCAL}} {
  id: number;
}
"##;

pub const SERVICE: &str = r##"import apiClient from '../../core/api/apiClient';
import type { {{PASCAL}} } from '../types/{{CAMEL}}.types';

export const {{CAMEL}}Service = {
  async getAll(): Promise<{{PASCAL}}[]> {
    const response = await apiClient.get('/{{SNAKE}}');
    return response.data;
  },
};
"##;

pub const HOOK: &str = r##"import { useState, useCallback } from 'react';
import type { {{PASCAL}} } from '../types/{{CAMEL}}.types';
import { {{CAMEL}}Service } from '../services/{{CAMEL}}.service';

export const use{{PASCAL}} = () => {
  const [data, setData] = useState<{{PASCAL}} | null>(null);
  const [isLoading, setIsLoading] = useState(false);

  const fetch = useCallback(async () => {
    setIsLoading(true);
    try {
      const result = await {{CAMEL}}Service.getAll();
      setData(result[0]);
    } finally {
      setIsLoading(false);
    }
  }, []);

  return { data, isLoading, fetch };
};
"##;

// ──────────── Atomic Design ────────────

pub const ATOM_BUTTON: &str = r##"import React from 'react';
import { TouchableOpacity, Text, StyleSheet } from 'react-native';
import { useTheme } from '../../../core/theme/ThemeContext';

interface Props { title: string; onPress: () => void; }

export const {{PASCAL}}Button: React.FC<Props> = ({ title, onPress }) => {
  const { colors } = useTheme();
  return (
    <TouchableOpacity style={[styles.btn, { backgroundColor: colors.primary }]} onPress={onPress}>
      <Text style={styles.text}>{title}</Text>
    </TouchableOpacity>
  );
};

const styles = StyleSheet.create({
  btn: { padding: 16, borderRadius: 12, alignItems: 'center' },
  text: { color: '#fff', fontSize: 16, fontWeight: 'bold' },
});
"##;

pub const MOLECULE_FORM_FIELD: &str = r##"import React from 'react';
import { View, Text, TextInput, StyleSheet } from 'react-native';
import { useTheme } from '../../../core/theme/ThemeContext';

interface Props { label: string; value: string; onChangeText: (t: string) => void; }

export const {{PASCAL}}FormField: React.FC<Props> = ({ label, value, onChangeText }) => {
  const { colors } = useTheme();
  return (
    <View style={styles.container}>
      <Text style={[styles.label, { color: colors.textPrimary }]}>{label}</Text>
      <TextInput style={[styles.input, { borderColor: colors.divider }]} value={value} onChangeText={onChangeText} />
    </View>
  );
};

const styles = StyleSheet.create({
  container: { marginBottom: 16 },
  label: { fontSize: 14, marginBottom: 8 },
  input: { borderWidth: 1, borderRadius: 8, padding: 12 },
});
"##;

// ──────────── MVVM ────────────

pub const VIEW_MODEL: &str = r##"import { useState, useCallback } from 'react';

export const use{{PASCAL}}ViewModel = () => {
  const [isLoading, setIsLoading] = useState(false);
  const fetchData = useCallback(() => { /* ... */ }, []);
  return { isLoading, fetchData };
};
"##;

// ──────────── Screens ────────────

/// Minimal screen emitted by feature generation.
pub const DEFAULT_SCREEN: &str = r##"import React from 'react';
import { View, Text } from 'react-native';

export const {{PASCAL}}Screen = () => <View><Text>{{PASCAL}} Screen</Text></View>;
"##;

/// Styled screen emitted by the standalone screen generator.
pub const STYLED_SCREEN: &str = r##"import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export const {{PASCAL}}Screen: React.FC = () => {
  return (
    <View style={styles.container}>
      <Text style={styles.title}>{{PASCAL}}</Text>
      <Text style={styles.subtitle}>{{PASCAL}} Screen</Text>
    </View>
  );
};

const styles = StyleSheet.create({
  container: { flex: 1, justifyContent: 'center', alignItems: 'center', padding: 16 },
  title: { fontSize: 24, fontWeight: 'bold', marginBottom: 8 },
  subtitle: { fontSize: 16, color: '#757575' },
});
"##;

/// Login screen for the `auth` feature. The Register screen is this content
/// with every `Login` replaced by `Register`.
pub const LOGIN_SCREEN: &str = r##"import React, { useState } from 'react';
import { View, Text, TextInput, TouchableOpacity, StyleSheet, KeyboardAvoidingView, Platform } from 'react-native';
import { useTheme } from '../../../core/theme/ThemeContext';

export const LoginScreen: React.FC = () => {
  const { colors } = useTheme();
  return (
    <KeyboardAvoidingView style={[styles.container, { backgroundColor: colors.background }]} behavior={Platform.OS === 'ios' ? 'padding' : undefined}>
      <Text style={[styles.title, { color: colors.textPrimary }]}>Welcome</Text>
      <TextInput style={[styles.input, { borderColor: colors.divider, color: colors.textPrimary }]} placeholder="Email" placeholderTextColor={colors.textSecondary} />
      <TouchableOpacity style={[styles.btn, { backgroundColor: colors.primary }]}>
        <Text style={styles.btnText}>Login</Text>
      </TouchableOpacity>
    </KeyboardAvoidingView>
  );
};

const styles = StyleSheet.create({
  container: { flex: 1, padding: 24, justifyContent: 'center' },
  title: { fontSize: 32, fontWeight: 'bold', marginBottom: 24 },
  input: { borderWidth: 1, borderRadius: 12, padding: 16, marginBottom: 16 },
  btn: { padding: 18, borderRadius: 12, alignItems: 'center' },
  btnText: { color: '#fff', fontSize: 18, fontWeight: 'bold' },
});
"##;

// ──────────── Models (standalone model generator) ────────────

pub const MODEL_CLEAN: &str = r##"export interface {{PASCAL}} {
  id: number;
}

export class {{PASCAL}}Model implements {{PASCAL}} {
  id: number;

  constructor(data: { id: number }) {
    this.id = data.id;
  }

  static fromJson(json: Record<string, unknown>): {{PASCAL}}Model {
    return new {{PASCAL}}Model({ id: json['id'] as number });
  }

  toJson(): Record<string, unknown> {
    return { id: this.id };
  }
}
"##;

pub const MODEL_MVVM: &str = r##"export interface {{PASCAL}}Model {
  id: number;
}

export const create{{PASCAL}} = (data: Partial<{{PASCAL}}Model>): {{PASCAL}}Model => ({
  id: data.id ?? 0,
});

export const {{CAMEL}}FromJson = (json: Record<string, unknown>): {{PASCAL}}Model => ({
  id: json['id'] as number,
});

export const {{CAMEL}}ToJson = (model: {{PASCAL}}Model): Record<string, unknown> => ({
  id: model.id,
});
"##;

pub const MODEL_TYPES: &str = r##"export interface {{PASCAL}} {
  id: number;
}

export interface {{PASCAL}}CreateInput {
  id?: number;
}

export interface {{PASCAL}}UpdateInput {
  id?: number;
}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeatureName;
    use crate::templates::render;

    #[test]
    fn entity_references_snake_file_name() {
        let out = render(REPOSITORY, &FeatureName::new("order history"));
        assert!(out.contains("from '../entities/order_historyEntity'"));
        assert!(out.contains("interface IOrderHistoryRepository"));
    }

    #[test]
    fn service_uses_camel_and_snake_forms() {
        let out = render(SERVICE, &FeatureName::new("user profile"));
        assert!(out.contains("userProfileService"));
        assert!(out.contains("apiClient.get('/user_profile')"));
        assert!(out.contains("from '../types/userProfile.types'"));
    }

    #[test]
    fn register_screen_is_login_with_labels_swapped() {
        let register = LOGIN_SCREEN.replace("Login", "Register");
        assert!(register.contains("export const RegisterScreen"));
        assert!(register.contains(">Register</Text>"));
        assert!(!register.contains("Login"));
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        let name = FeatureName::new("cart");
        for template in [
            ENTITY,
            REPOSITORY,
            USE_CASE,
            DATA_MODEL,
            REMOTE_DATA_SOURCE,
            REPOSITORY_IMPL,
            REDUX_SLICE,
            ZUSTAND_STORE,
            TYPES,
            SERVICE,
            HOOK,
            ATOM_BUTTON,
            MOLECULE_FORM_FIELD,
            VIEW_MODEL,
            DEFAULT_SCREEN,
            STYLED_SCREEN,
            MODEL_CLEAN,
            MODEL_MVVM,
            MODEL_TYPES,
        ] {
            let out = render(template, &name);
            assert!(!out.contains("{{"), "unfilled placeholder in:\n{out}");
        }
    }
}
